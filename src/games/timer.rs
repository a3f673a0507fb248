//! Cancellable scheduled events owned by a game.
//!
//! A `Timer` never fires on its own: the owning game feeds it elapsed time
//! with [`Timer::advance`] and drains due firings with [`Timer::poll`].
//! Cancelling a timer drops any accumulated time, so nothing scheduled before
//! the cancel can fire afterwards.

use std::time::Duration;

/// Whether a timer fires once or keeps firing every period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Schedule {
    Once,
    Repeating,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    period_ms: u64,
    elapsed_ms: u64,
    schedule: Schedule,
    armed: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::disarmed()
    }
}

impl Timer {
    /// A timer that is not scheduled.
    pub fn disarmed() -> Self {
        Self {
            period_ms: 0,
            elapsed_ms: 0,
            schedule: Schedule::Once,
            armed: false,
        }
    }

    /// Single-shot timer firing `delay_ms` after arming.
    pub fn once(delay_ms: u64) -> Self {
        Self {
            period_ms: delay_ms,
            elapsed_ms: 0,
            schedule: Schedule::Once,
            armed: true,
        }
    }

    /// Periodic timer firing every `period_ms` (at least 1ms).
    pub fn repeating(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
            schedule: Schedule::Repeating,
            armed: true,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Milliseconds until the next firing, or `None` when disarmed.
    pub fn remaining_ms(&self) -> Option<u64> {
        self.armed
            .then(|| self.period_ms.saturating_sub(self.elapsed_ms))
    }

    /// Milliseconds accumulated past the most recent firing edge.
    ///
    /// Only meaningful right after `poll` returned true.
    pub fn overshoot_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    /// Accumulate elapsed time. Has no effect on a disarmed timer.
    pub fn advance(&mut self, dt_ms: u64) {
        if self.armed {
            self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        }
    }

    /// Consume one due firing. Call in a loop to drain several periods.
    pub fn poll(&mut self) -> bool {
        if !self.armed || self.elapsed_ms < self.period_ms {
            return false;
        }
        self.elapsed_ms -= self.period_ms;
        if self.schedule == Schedule::Once {
            self.armed = false;
        }
        true
    }
}

/// Converts wall-clock durations into whole milliseconds for ticking,
/// carrying the sub-millisecond remainder into the next frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct MillisClock {
    carry_us: u128,
}

impl MillisClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole milliseconds covered by `elapsed` plus any carried remainder.
    pub fn take(&mut self, elapsed: Duration) -> u64 {
        let total_us = self.carry_us + elapsed.as_micros();
        self.carry_us = total_us % 1000;
        u64::try_from(total_us / 1000).unwrap_or(u64::MAX)
    }
}
