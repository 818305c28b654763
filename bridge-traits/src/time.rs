//! Wall-clock access for timestamping new records.

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Hosts normally use [`SystemClock`]; tests pass a fixed clock so stamped
/// records are reproducible.
///
/// ```
/// use bridge_traits::time::{Clock, SystemClock};
///
/// let stamped = SystemClock.now();
/// assert!(stamped.timestamp() > 0);
/// ```
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Current Unix timestamp in milliseconds
    fn unix_timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}

/// Clock backed by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
