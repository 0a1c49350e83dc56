use std::time::{Duration, Instant};

/// Outcome of polling an [`IntervalSchedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTick {
    Idle,
    /// One tick is due; `missed` counts whole intervals folded into it.
    Due { missed: u32 },
}

/// Cancellable fixed-interval timer driven by the host's clock.
///
/// Polling never fires more than once: intervals that elapsed while the host
/// was busy are coalesced into a single tick and the next deadline is
/// realigned to the original cadence.
#[derive(Debug, Clone)]
pub struct IntervalSchedule {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalSchedule {
    /// A zero interval is raised to one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_due
    }

    /// First tick becomes due one interval after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn poll(&mut self, now: Instant) -> ScheduleTick {
        let Some(due) = self.next_due else {
            return ScheduleTick::Idle;
        };
        if now < due {
            return ScheduleTick::Idle;
        }

        let late = now.duration_since(due);
        let missed = u32::try_from(late.as_nanos() / self.interval.as_nanos()).unwrap_or(u32::MAX);
        let realigned = self
            .interval
            .checked_mul(missed.saturating_add(1))
            .and_then(|step| due.checked_add(step))
            .filter(|next| *next > now);
        // A saturated count cannot realign; restart the cadence from `now`.
        self.next_due = Some(realigned.unwrap_or(now + self.interval));
        ScheduleTick::Due { missed }
    }
}
