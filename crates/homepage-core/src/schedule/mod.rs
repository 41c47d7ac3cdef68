//! Task scheduling.
//!
//! - [`run_fixed_rate`] fires on a fixed period measured from start. Ticks
//!   missed while a run overran are skipped, not replayed.
//! - [`run_fixed_delay`] sleeps for the delay after each run completes, so
//!   two runs never overlap.
//!
//! Both run the task once immediately and return as soon as the
//! cancellation token fires.

use std::future::Future;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// One unit of scheduled work.
pub trait Tick: Send {
    /// Name used in log events.
    fn name(&self) -> &'static str;

    fn tick(&mut self) -> impl Future<Output = ()> + Send;
}

pub async fn run_fixed_rate<T: Tick>(period: Duration, cancel: CancellationToken, mut task: T) {
    debug!(
        event = "core.schedule.fixed_rate_started",
        task = task.name(),
        period_ms = period.as_millis() as u64
    );

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = task.tick() => {}
                }
            }
        }
    }

    debug!(
        event = "core.schedule.stopped",
        task = task.name(),
        reason = "cancelled"
    );
}

pub async fn run_fixed_delay<T: Tick>(delay: Duration, cancel: CancellationToken, mut task: T) {
    debug!(
        event = "core.schedule.fixed_delay_started",
        task = task.name(),
        delay_secs = delay.as_secs()
    );

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = task.tick() => {}
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }
    }

    debug!(
        event = "core.schedule.stopped",
        task = task.name(),
        reason = "cancelled"
    );
}
