//! Fixed-interval countdown scheduling.
//!
//! The session itself only knows "one second elapsed" ([`crate::scoring::Session::timer_tick`]).
//! This type owns the wall-clock schedule and its own cancellation, and is
//! polled from the same loop that drives frames, so there is no hidden
//! interval closure holding game state.

use std::time::{Duration, Instant};

/// One-second wall-clock ticker with explicit cancellation.
#[derive(Debug)]
pub struct CountdownTimer {
    period: Duration,
    /// Next tick deadline; `None` once cancelled.
    deadline: Option<Instant>,
}

impl CountdownTimer {
    pub const PERIOD: Duration = Duration::from_secs(1);

    /// Starts the schedule; the first tick fires one period after `now`.
    pub fn start(now: Instant) -> Self {
        Self::with_period(now, Self::PERIOD)
    }

    pub fn with_period(now: Instant, period: Duration) -> Self {
        Self {
            period,
            deadline: Some(now + period),
        }
    }

    /// Stops the schedule permanently. Subsequent polls yield no ticks.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.deadline.is_none()
    }

    /// Number of whole periods elapsed by `now` since the last poll.
    ///
    /// Returning a count (rather than a bool) keeps the countdown honest when
    /// a frame stalls past more than one period.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.deadline else {
            return 0;
        };
        let mut ticks = 0;
        while now >= deadline {
            ticks += 1;
            deadline += self.period;
        }
        self.deadline = Some(deadline);
        ticks
    }
}
