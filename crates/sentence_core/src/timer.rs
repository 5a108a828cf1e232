use std::time::Duration;

pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(60);

/// Countdown to the next automatic random advance.
///
/// Time only moves forward through [`AutoAdvance::advance`]; a zero interval
/// disables the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ADVANCE)
    }
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Starts the countdown over from the full interval.
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Adds `delta` to the elapsed time. Returns `true` when the interval has
    /// been reached, in which case the countdown restarts.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.is_enabled() {
            return false;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        if self.elapsed >= self.interval {
            self.restart();
            true
        } else {
            false
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.is_enabled()
            .then(|| self.interval.saturating_sub(self.elapsed))
    }
}
