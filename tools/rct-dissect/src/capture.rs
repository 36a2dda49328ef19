//! Capture file loading.
//!
//! A capture is the raw byte stream of one direction of a device
//! conversation, either as a binary file or as a hex dump (whitespace and
//! line breaks are ignored, a leading `0x` per token is accepted).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Loads a capture file as raw bytes.
pub fn load_binary(path: &Path) -> Result<Vec<u8>> {
    let data =
        fs::read(path).with_context(|| format!("cannot read capture file {}", path.display()))?;
    debug!("loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Loads a hex dump capture file.
pub fn load_hex(path: &Path) -> Result<Vec<u8>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read capture file {}", path.display()))?;
    let digits: String = text
        .split_whitespace()
        .map(|token| token.strip_prefix("0x").unwrap_or(token))
        .collect();
    let data = hex::decode(&digits).context("capture file is not valid hex")?;
    debug!("loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_with_whitespace_and_prefixes() {
        let path = std::env::temp_dir().join(format!("rct-dissect-test-{}", std::process::id()));
        fs::write(&path, "2b 01 04\n0x95 0x99\n30bf\n").unwrap();
        let data = load_hex(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(data, vec![0x2B, 0x01, 0x04, 0x95, 0x99, 0x30, 0xBF]);
    }

    #[test]
    fn rejects_bad_hex() {
        let path = std::env::temp_dir().join(format!("rct-dissect-bad-{}", std::process::id()));
        fs::write(&path, "zz").unwrap();
        let result = load_hex(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }
}
