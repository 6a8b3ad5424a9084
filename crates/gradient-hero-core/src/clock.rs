//! Animation clock.
//!
//! Advances the animation offset by a fixed step on a fixed period and
//! publishes each new offset on a watch channel. The tick task lives
//! exactly as long as the clock: [`AnimationClock::stop`] or dropping the
//! clock releases it, after which subscribers see the channel close.
//!
//! The offset is derived as `ticks * step` rather than accumulated, so it
//! carries no rounding drift however long the page stays open.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::time::{Instant, MissedTickBehavior};

use crate::config::AnimationConfig;
use crate::task::TaskHandle;

pub struct AnimationClock {
    step: f64,
    ticks: Arc<AtomicU64>,
    offset_rx: watch::Receiver<f64>,
    task: Option<TaskHandle>,
}

impl AnimationClock {
    /// Start ticking. Must be called inside a tokio runtime.
    pub fn start(config: &AnimationConfig) -> Self {
        let period = config.tick_period();
        let step = config.step;
        let (offset_tx, offset_rx) = watch::channel(0.0);
        let ticks = Arc::new(AtomicU64::new(0));

        let task_ticks = ticks.clone();
        let task = TaskHandle::spawn(async move {
            // First tick one period from now, like a browser interval.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let n = task_ticks.fetch_add(1, Ordering::Relaxed) + 1;
                if offset_tx.send(n as f64 * step).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, step, "Animation clock started");

        Self {
            step,
            ticks,
            offset_rx,
            task: Some(task),
        }
    }

    /// Number of ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Current animation offset.
    pub fn offset(&self) -> f64 {
        self.ticks() as f64 * self.step
    }

    /// Receiver that wakes on every tick.
    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.offset_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Stop ticking and wait for the tick task to be released.
    pub async fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel().await;
            tracing::debug!(ticks = self.ticks(), "Animation clock stopped");
        }
    }
}
