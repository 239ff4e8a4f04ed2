//! Signed duration value with millisecond resolution.

use serde::{Deserialize, Serialize};

/// A signed elapsed time with millisecond resolution.
///
/// This is the canonical in-memory representation for every duration the
/// pipeline touches: lap and sector times, qualifying segments, gaps and
/// session-relative offsets. Values are stored as integer milliseconds so
/// that encoding and decoding round-trip exactly; float seconds only appear
/// at the conversion boundaries.
///
/// Negative values are valid; intervals and gaps can run backwards.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSpan {
    millis: i64,
}

impl TimeSpan {
    /// Zero-length span.
    pub const ZERO: TimeSpan = TimeSpan { millis: 0 };

    /// Create a span from integer milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        TimeSpan { millis }
    }

    /// Create a span from floating-point seconds.
    ///
    /// Rounds half away from zero on `seconds * 1000` before any component
    /// decomposition happens, so `59.9995` becomes exactly one minute.
    /// Returns `None` for NaN, infinite, or out-of-range inputs; missing
    /// propagates, it never panics.
    pub fn from_secs_f64(seconds: f64) -> Option<Self> {
        if !seconds.is_finite() {
            return None;
        }
        let millis = (seconds * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return None;
        }
        Some(TimeSpan { millis: millis as i64 })
    }

    /// Signed milliseconds.
    pub const fn as_millis(self) -> i64 {
        self.millis
    }

    /// Magnitude in milliseconds.
    pub const fn abs_millis(self) -> u64 {
        self.millis.unsigned_abs()
    }

    /// Signed floating-point seconds.
    pub fn as_secs_f64(self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// Whether the span runs backwards.
    pub const fn is_negative(self) -> bool {
        self.millis < 0
    }
}
