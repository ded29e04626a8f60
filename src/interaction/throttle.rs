use std::time::{Duration, Instant};

use tracing::trace;

/// Outcome of offering a call to a [`Throttle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleDecision {
    /// Run the call now.
    RunNow,
    /// A trailing call is pending; poll again after this delay.
    Defer(Duration),
}

/// Leading-edge throttle with a single trailing call.
///
/// The first call runs immediately. Calls arriving within `limit` of the last
/// run collapse into one pending call that becomes due `limit` after that run.
/// Time is supplied by the caller, so the gate never sleeps or spawns timers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throttle {
    limit: Duration,
    last_ran: Option<Instant>,
    pending: bool,
}

impl Throttle {
    #[must_use]
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            last_ran: None,
            pending: false,
        }
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn call(&mut self, now: Instant) -> ThrottleDecision {
        let Some(last_ran) = self.last_ran else {
            self.mark_ran(now);
            return ThrottleDecision::RunNow;
        };

        let elapsed = now.saturating_duration_since(last_ran);
        if elapsed >= self.limit {
            self.mark_ran(now);
            return ThrottleDecision::RunNow;
        }

        self.pending = true;
        let remaining = self.limit - elapsed;
        trace!(remaining_ms = remaining.as_millis() as u64, "throttle deferred call");
        ThrottleDecision::Defer(remaining)
    }

    /// Returns `true` when the pending trailing call is due and consumes it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.pending {
            return false;
        }
        let due = self
            .last_ran
            .is_none_or(|last_ran| now.saturating_duration_since(last_ran) >= self.limit);
        if due {
            self.mark_ran(now);
        }
        due
    }

    fn mark_ran(&mut self, now: Instant) {
        self.last_ran = Some(now);
        self.pending = false;
    }
}
