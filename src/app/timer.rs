//! Periodic animation timer.

use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Cancellable periodic task that emits animation ticks.
///
/// Ticks are delivered with `try_send`: when the loop falls behind, ticks are
/// dropped rather than queued. The task is aborted on [`stop`](Self::stop) or drop.
pub struct AnimationTimer {
    handle: Option<JoinHandle<()>>,
}

impl AnimationTimer {
    /// Tick period of the particle animation
    pub const PERIOD: Duration = Duration::from_millis(50);

    /// Spawn the timer on the current tokio runtime
    pub fn start(period: Duration, tx: mpsc::Sender<Instant>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                let at = interval.tick().await;
                match tx.try_send(at.into_std()) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        Self {
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AnimationTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
