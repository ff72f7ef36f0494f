//! Timestamp generation for OKX API authentication.
//!
//! OKX requires an ISO-8601 UTC timestamp with millisecond precision
//! (e.g., `2024-01-01T00:00:00.000Z`). The exact string used in the prehash
//! must also be sent in the `OK-ACCESS-TIMESTAMP` header; skew beyond OKX's
//! tolerance window (30 seconds) rejects the request.

use time::OffsetDateTime;
use time::macros::format_description;

/// Trait for providing request timestamps.
///
/// The signing timestamp is the only time-dependent signing input, so this
/// seam is what makes signatures reproducible in tests.
pub trait TimestampProvider: Send + Sync {
    /// Produce an ISO-8601 UTC timestamp string with exactly three
    /// fractional digits and a `Z` suffix.
    fn timestamp(&self) -> String;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn timestamp(&self) -> String {
        OffsetDateTime::now_utc()
            .format(format_description!(
                "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
            ))
            // Formatting a valid UTC datetime with a static description cannot
            // fail; an empty string is rejected later by sign_request.
            .unwrap_or_default()
    }
}

/// Timestamp provider that always returns a fixed string.
///
/// Useful for reproducing signatures bit-exactly in tests.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl TimestampProvider for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_format() {
        let ts = SystemClock.timestamp();

        // 2024-01-01T00:00:00.000Z is 24 characters.
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(ts[20..23].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_system_clock_millisecond_precision_only() {
        let ts = SystemClock.timestamp();
        // Exactly three fractional digits, never truncated or extended.
        let fractional = ts.split('.').nth(1).unwrap();
        assert_eq!(fractional.len(), 4); // "mmmZ"
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock("2024-01-01T00:00:00.000Z".to_string());
        assert_eq!(clock.timestamp(), "2024-01-01T00:00:00.000Z");
        assert_eq!(clock.timestamp(), clock.timestamp());
    }
}
