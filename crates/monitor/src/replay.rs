//! Replay a recorded JSON-lines frame stream through a session

use std::io::{BufRead, Write};

use tracing::warn;

use crate::config::MonitorConfig;
use crate::frame::Frame;
use crate::session::{MonitorSession, SessionStats};
use crate::MonitorError;

/// Feed every frame line from `input` through a fresh session and write one
/// JSON alert per line to `output`.
///
/// Without `alert.hold_ms` each alert counts as presented immediately.
/// Malformed lines are logged and skipped.
pub fn replay<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &MonitorConfig,
) -> Result<SessionStats, MonitorError> {
    let mut session = MonitorSession::new(config);

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let frame: Frame = match serde_json::from_slice(&line) {
            Ok(frame) => frame,
            Err(source) => {
                let err = MonitorError::Frame {
                    line: index + 1,
                    source,
                };
                warn!("Skipping frame: {}", err);
                session.record_malformed();
                continue;
            }
        };

        if let Some(alert) = session.process(&frame) {
            serde_json::to_writer(&mut output, &alert)?;
            writeln!(output)?;
            if config.alert.hold_ms.is_none() {
                session.complete_alert();
            }
        }
    }
    output.flush()?;

    Ok(session.stats())
}
