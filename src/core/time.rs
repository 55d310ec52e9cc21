//! Wall-clock access
//!
//! All timestamps in persisted snapshots come from this single read point.

use crate::core::types::Timestamp;
use std::time::{SystemTime, UNIX_EPOCH};

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as Timestamp)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let a = now_millis();
        let b = now_millis();
        assert!(b >= a);
    }
}
