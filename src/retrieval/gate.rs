use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between outbound calls.
///
/// Callers reserve the next free slot under a short lock and then sleep
/// outside it, so concurrent sentence pipelines are spaced out without any of
/// them holding the lock while waiting.
#[derive(Debug)]
pub struct MinIntervalGate {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl MinIntervalGate {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    /// A gate that never waits.
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Waits until this caller's slot is reached.
    pub async fn wait(&self) {
        if self.interval.is_zero() {
            return;
        }

        let slot = {
            let mut next = self.next_slot.lock();
            let now = Instant::now();
            let slot = match *next {
                Some(t) if t > now => t,
                _ => now,
            };
            *next = Some(slot + self.interval);
            slot
        };

        tokio::time::sleep_until(slot).await;
    }
}
