// Periodic timer driving consent playback.
// The handle owns the ticking task; dropping it cancels the task.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

/// Default period between playback steps.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(2000);

/// A tick from a specific timer instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackTick {
    pub generation: u64,
}

/// Scoped handle to a running playback timer.
///
/// The first tick fires one full `period` after start. Ticks carry the
/// generation the timer was started with so the receiver can discard ticks
/// that were queued before the handle was dropped.
#[derive(Debug)]
pub struct PlaybackTimer {
    generation: u64,
    task: JoinHandle<()>,
}

impl PlaybackTimer {
    /// Spawn the ticking task on the current tokio runtime.
    pub fn start(generation: u64, period: Duration, tx: UnboundedSender<PlaybackTick>) -> Self {
        debug!(generation, period_ms = period.as_millis() as u64, "arming playback timer");
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(PlaybackTick { generation }).is_err() {
                    break;
                }
            }
        });
        Self { generation, task }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether `tick` came from this timer.
    pub fn owns(&self, tick: PlaybackTick) -> bool {
        tick.generation == self.generation
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.task.abort();
        debug!(generation = self.generation, "playback timer cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_at_fixed_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let started = Instant::now();
        let timer = PlaybackTimer::start(7, Duration::from_millis(2000), tx);

        let tick = rx.recv().await.unwrap();
        assert!(timer.owns(tick));
        assert_eq!(started.elapsed(), Duration::from_millis(2000));

        rx.recv().await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(4000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticking() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = PlaybackTimer::start(1, Duration::from_millis(2000), tx.clone());

        rx.recv().await.unwrap();
        drop(timer);

        // The channel stays open through `tx`, so silence means no task is left
        let next = time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert!(next.is_err(), "tick delivered after cancellation");
    }

    #[tokio::test]
    async fn test_owns_matches_generation() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let timer = PlaybackTimer::start(3, DEFAULT_TICK_INTERVAL, tx);
        assert_eq!(timer.generation(), 3);
        assert!(timer.owns(PlaybackTick { generation: 3 }));
        assert!(!timer.owns(PlaybackTick { generation: 2 }));
    }
}
