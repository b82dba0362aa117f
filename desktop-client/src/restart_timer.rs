use std::time::{Duration, Instant};

/// Countdown from the end of a round to the start of the next one.
#[derive(Debug, Clone, Copy)]
pub struct RestartTimer {
    started_at: Instant,
    delay: Duration,
}

impl RestartTimer {
    pub fn start_at(now: Instant, delay: Duration) -> Self {
        Self {
            started_at: now,
            delay,
        }
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    pub fn is_elapsed_at(&self, now: Instant) -> bool {
        self.remaining_at(now).is_zero()
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }
}
