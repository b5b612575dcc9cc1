//! Clock abstraction so expiration checks sample time at assertion, not at
//! chain construction, and stay deterministic under test.

use chrono::{DateTime, Utc};

/// Source of the current UTC time for time-dependent checks.
pub trait Clock: Send + Sync {
    /// Get the current UTC time.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System clock using actual wall time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a fixed instant, for deterministic tests.
#[cfg(any(test, feature = "test-seams"))]
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

#[cfg(any(test, feature = "test-seams"))]
impl FixedClock {
    /// Freeze the clock at the given instant.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Freeze the clock at an RFC 3339 instant.
    pub fn at_rfc3339(s: &str) -> Self {
        Self {
            now: DateTime::parse_from_rfc3339(s)
                .expect("valid RFC 3339")
                .with_timezone(&Utc),
        }
    }

    /// Move the frozen instant forward by a duration.
    pub fn advance(&mut self, duration: chrono::Duration) {
        self.now = self.now + duration;
    }
}

#[cfg(any(test, feature = "test-seams"))]
impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.now
    }
}
