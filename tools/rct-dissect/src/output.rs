//! Output formatting for dissected captures.

use colored::Colorize;
use rctkit::registry::REGISTRY;

use crate::dissect::{CaptureEvent, DissectedFrame};

/// Output formatter configuration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub show_raw_hex: bool,
    pub use_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_raw_hex: false,
            use_color: true,
        }
    }
}

/// Formats one capture event as a display line.
pub fn format_event(counter: usize, event: &CaptureEvent, config: &OutputConfig) -> String {
    match event {
        CaptureEvent::Frame(frame) => format_frame(counter, frame, config),
        CaptureEvent::Error {
            offset,
            skipped,
            error,
        } => {
            let message = format!(
                "[{counter:4}] @{offset:<6} skipped {skipped} bytes: {error}"
            );
            if config.use_color {
                message.red().to_string()
            } else {
                message
            }
        }
    }
}

fn format_frame(counter: usize, dissected: &DissectedFrame, config: &OutputConfig) -> String {
    let frame = &dissected.frame;
    let name = dissected.info.map(|info| info.name).unwrap_or("<unknown>");

    let mut line = format!(
        "[{counter:4}] @{offset:<6} {command:<14} id={id:#010X} {name:<width$}",
        offset = dissected.offset,
        command = format!("{:?}", frame.command),
        id = frame.id,
        width = REGISTRY.name_max_length(),
    );

    if frame.address != 0 {
        line.push_str(&format!(" addr={:#010X}", frame.address));
    }

    match (&dissected.value, frame.data.is_empty()) {
        (Some(value), _) => {
            let unit = dissected.info.and_then(|info| info.unit).unwrap_or("");
            line.push_str(&format!(" = {value} {unit}"));
        }
        (None, false) => {
            line.push_str(&format!(" [{} payload bytes]", frame.data.len()));
        }
        (None, true) => {}
    }

    if config.show_raw_hex {
        line.push_str(&format!(" [{}]", hex::encode(&frame.data)));
    }

    if config.use_color {
        let status = "CRC OK".green();
        format!("{line} [{status}]")
    } else {
        format!("{line} [CRC OK]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dissect::dissect_capture;
    use rctkit::protocol::Frame;

    #[test]
    fn formats_read_frame_without_color() {
        let capture = Frame::read(0x959930BF).encode().unwrap();
        let events = dissect_capture(&capture);
        let config = OutputConfig {
            show_raw_hex: false,
            use_color: false,
        };
        let line = format_event(0, &events[0], &config);
        assert!(line.contains("battery.soc"));
        assert!(line.contains("id=0x959930BF"));
        assert!(line.contains("[CRC OK]"));
    }
}
