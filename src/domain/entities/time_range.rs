//! Inclusive time window for visited domain queries.

use chrono::{DateTime, Utc};

/// A closed interval `[from, to]` of UTC instants.
///
/// Construction guarantees `from <= to`; a zero-length window
/// (`from == to`) is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl TimeRange {
    /// Returns `None` when `from` is later than `to`.
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Option<Self> {
        (from <= to).then_some(Self { from, to })
    }

    /// Builds a range from Unix timestamps in whole seconds.
    ///
    /// Returns `None` if either value is outside chrono's representable
    /// range or the bounds are inverted.
    pub fn from_unix_seconds(from: i64, to: i64) -> Option<Self> {
        let from = DateTime::from_timestamp(from, 0)?;
        let to = DateTime::from_timestamp(to, 0)?;
        Self::new(from, to)
    }

    pub fn from(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn to(&self) -> DateTime<Utc> {
        self.to
    }

    /// Both bounds are included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.from <= instant && instant <= self.to
    }
}
