//! Single-worker monitoring pipeline
//!
//! Frames go through a `watch` channel so the worker only ever sees the most
//! recent one; frames overwritten before the worker gets to them are dropped.
//! The worker task exclusively owns the session. Completions are handled
//! before a pending frame.

use alerting::AlertEvent;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::MonitorConfig;
use crate::frame::Frame;
use crate::session::{MonitorSession, SessionStats};
use crate::MonitorError;

/// Handle to a running monitor worker
pub struct MonitorHandle {
    frames: watch::Sender<Option<Frame>>,
    completions: mpsc::UnboundedSender<()>,
    alerts: mpsc::Receiver<AlertEvent>,
    task: JoinHandle<SessionStats>,
}

/// Spawn the worker task on the current tokio runtime
pub fn spawn_worker(config: &MonitorConfig) -> MonitorHandle {
    let (frame_tx, mut frame_rx) = watch::channel(None::<Frame>);
    let (alert_tx, alert_rx) = mpsc::channel(config.alert_channel_capacity.max(1));
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<()>();
    let mut session = MonitorSession::new(config);

    let task = tokio::spawn(async move {
        info!("Monitor worker started");
        loop {
            tokio::select! {
                biased;

                Some(()) = done_rx.recv() => {
                    if !session.complete_alert() {
                        debug!("Completion received with no active alert");
                    }
                }
                changed = frame_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let frame = frame_rx.borrow_and_update().clone();
                    let Some(frame) = frame else { continue };

                    if let Some(alert) = session.process(&frame) {
                        if alert_tx.send(alert).await.is_err() {
                            warn!("Alert receiver dropped, stopping worker");
                            break;
                        }
                    }
                }
            }
        }

        let stats = session.stats();
        info!("Monitor worker stopped: {:?}", stats);
        stats
    });

    MonitorHandle {
        frames: frame_tx,
        completions: done_tx,
        alerts: alert_rx,
        task,
    }
}

impl MonitorHandle {
    /// Hand the latest frame to the worker, replacing any unprocessed one
    pub fn submit(&self, frame: Frame) -> Result<(), MonitorError> {
        self.frames
            .send(Some(frame))
            .map_err(|_| MonitorError::WorkerStopped)
    }

    /// Wait for the next alert
    pub async fn next_alert(&mut self) -> Option<AlertEvent> {
        self.alerts.recv().await
    }

    /// Tell the worker the current alert has finished presenting
    pub fn complete_alert(&self) -> Result<(), MonitorError> {
        self.completions
            .send(())
            .map_err(|_| MonitorError::WorkerStopped)
    }

    /// Stop feeding frames and wait for the worker to finish
    pub async fn shutdown(self) -> Result<SessionStats, MonitorError> {
        let Self {
            frames,
            completions,
            alerts,
            task,
        } = self;
        drop(frames);
        drop(completions);
        drop(alerts);

        task.await.map_err(|_| MonitorError::WorkerStopped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FaceMeasurement;
    use dms::FatigueRule;

    fn turned(t: u64) -> Frame {
        Frame::new(
            t,
            vec![FaceMeasurement {
                head_yaw_degrees: 30.0,
                ..Default::default()
            }],
        )
    }

    #[tokio::test]
    async fn test_alert_delivered() {
        let mut handle = spawn_worker(&MonitorConfig::default());

        handle.submit(turned(0)).unwrap();
        let alert = handle.next_alert().await.unwrap();
        assert_eq!(alert.rules, vec![FatigueRule::YawTurn]);

        let stats = handle.shutdown().await.unwrap();
        assert_eq!(stats.alerts_raised, 1);
    }

    #[tokio::test]
    async fn test_keeps_only_latest_frame() {
        let handle = spawn_worker(&MonitorConfig::default());

        // Worker has not run yet on the current-thread runtime
        handle.submit(Frame::new(0, vec![])).unwrap();
        handle.submit(Frame::new(10, vec![])).unwrap();
        handle.submit(turned(20)).unwrap();

        let stats = handle.shutdown().await.unwrap();
        assert_eq!(stats.frames_seen, 1);
        assert_eq!(stats.frames_without_face, 0);
    }

    #[tokio::test]
    async fn test_completion_rearms_latch() {
        let mut handle = spawn_worker(&MonitorConfig::default());

        handle.submit(turned(0)).unwrap();
        assert!(handle.next_alert().await.is_some());

        handle.complete_alert().unwrap();
        handle.submit(turned(6000)).unwrap();

        let alert = handle.next_alert().await.unwrap();
        assert_eq!(alert.timestamp_ms, 6000);
    }
}
