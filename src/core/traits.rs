//! Capabilities injected into the interpreters.

use chrono::Local;

use super::datetime::ReferenceMoment;

/// Source of the reference moment used for relative dates.
///
/// The interpreters never read the system time themselves; callers pick a
/// clock and pass its moment in.
pub trait Clock {
    /// The current day.
    fn now(&self) -> ReferenceMoment;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> ReferenceMoment {
        ReferenceMoment::from_naive(Local::now().date_naive())
    }
}

/// Clock that always returns the same moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ReferenceMoment);

impl Clock for FixedClock {
    fn now(&self) -> ReferenceMoment {
        self.0
    }
}
