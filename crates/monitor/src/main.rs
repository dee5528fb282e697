//! Fatigue replay - runs a recorded frame stream through the detector

use std::fs::File;
use std::io::{self, BufReader};

use monitor::{init_logging, replay, MonitorConfig};
use tracing::info;

const USAGE: &str = "usage: fatigue-replay <frames.jsonl> [config-file]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let frames_path = args.next().ok_or(USAGE)?;
    let config = MonitorConfig::load(args.next().as_deref())?;

    init_logging(&config.log_level)?;

    info!("=== Fatigue Replay v{} ===", env!("CARGO_PKG_VERSION"));
    info!("Replaying frames from {}", frames_path);

    let input = BufReader::new(File::open(&frames_path)?);
    let stats = replay(input, io::stdout().lock(), &config)?;

    info!(
        "Replay finished: {} frames, {} alerts, {} suppressed, {} malformed",
        stats.frames_seen, stats.alerts_raised, stats.alerts_suppressed, stats.malformed_frames
    );
    Ok(())
}
