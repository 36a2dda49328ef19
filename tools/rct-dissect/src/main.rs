//! Frame dissector for captured RCT Power device traffic.
//!
//! Walks a capture of one direction of a device conversation, printing one
//! line per frame with whatever the object registry knows about it, and
//! flagging the byte ranges that failed to decode.

mod capture;
mod dissect;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dissect::CaptureEvent;
use output::OutputConfig;

#[derive(Debug, Parser)]
#[command(name = "rct-dissect", version, about = "Dissect captured device traffic")]
struct Cli {
    /// Capture file to dissect.
    capture: PathBuf,

    /// Treat the capture as a hex dump instead of raw binary.
    #[arg(long)]
    hex: bool,

    /// Show the raw payload bytes of each frame.
    #[arg(long)]
    raw_hex: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = if cli.hex {
        capture::load_hex(&cli.capture)?
    } else {
        capture::load_binary(&cli.capture)?
    };

    let config = OutputConfig {
        show_raw_hex: cli.raw_hex,
        use_color: !cli.no_color,
    };

    let events = dissect::dissect_capture(&data);
    let mut frames = 0usize;
    let mut errors = 0usize;
    for (counter, event) in events.iter().enumerate() {
        match event {
            CaptureEvent::Frame(_) => frames += 1,
            CaptureEvent::Error { .. } => errors += 1,
        }
        println!("{}", output::format_event(counter, event, &config));
    }

    eprintln!("{} bytes, {frames} frames, {errors} errors", data.len());
    Ok(())
}
