//! Absolute-time reconstruction from session-relative offsets.
//!
//! Several lap and weather columns arrive as offsets from the session
//! start. Turning them into local wall-clock strings needs the session's
//! timezone-aware local start instant. When that instant is unknown the
//! clock simply does not exist and every wall-clock column for the session
//! is emitted missing: a missing value is recoverable downstream, a
//! silently UTC-shifted one is not.

use chrono::{DateTime, FixedOffset, TimeDelta};
use tracing::debug;

use crate::codec::{format_instant_hhmmss, format_instant_hhmmssms};
use crate::types::TimeSpan;

/// The local start instant of one session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    start: DateTime<FixedOffset>,
}

impl SessionClock {
    /// Create a clock from an explicit start instant.
    pub fn new(start: DateTime<FixedOffset>) -> Self {
        SessionClock { start }
    }

    /// Build a clock from the provider's local-start ISO string.
    ///
    /// Only a timezone-aware timestamp qualifies; a naive or unparseable
    /// string yields no clock. The UTC start instant recorded alongside it
    /// is never substituted here.
    pub fn from_local_iso(value: Option<&str>) -> Option<Self> {
        let raw = value?.trim();
        if raw.is_empty() {
            return None;
        }
        match DateTime::parse_from_rfc3339(raw) {
            Ok(start) => Some(SessionClock { start }),
            Err(err) => {
                debug!(value = %raw, %err, "local session start is not a zoned ISO instant");
                None
            }
        }
    }

    /// The session start instant.
    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    /// Shift the start by a session-relative offset.
    ///
    /// Returns `None` if the shift leaves the representable range; that
    /// row alone degrades.
    pub fn project(&self, offset: TimeSpan) -> Option<DateTime<FixedOffset>> {
        self.start.checked_add_signed(TimeDelta::milliseconds(offset.as_millis()))
    }

    /// Project an offset in seconds and format as `HH:MM:SS:mmm`.
    pub fn wall_clock_hhmmssms(&self, offset_seconds: f64) -> Option<String> {
        let offset = TimeSpan::from_secs_f64(offset_seconds)?;
        Some(format_instant_hhmmssms(&self.project(offset)?))
    }

    /// Project an offset in seconds and format as `HH:MM:SS`.
    pub fn wall_clock_hhmmss(&self, offset_seconds: f64) -> Option<String> {
        let offset = TimeSpan::from_secs_f64(offset_seconds)?;
        Some(format_instant_hhmmss(&self.project(offset)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monaco_quali_clock() -> SessionClock {
        SessionClock::from_local_iso(Some("2024-05-26T14:00:00+02:00")).unwrap()
    }

    #[test]
    fn projects_offsets_onto_the_local_clock() {
        let clock = monaco_quali_clock();
        assert_eq!(clock.wall_clock_hhmmssms(125.4).unwrap(), "14:02:05:400");
        assert_eq!(clock.wall_clock_hhmmss(125.4).unwrap(), "14:02:05");
        assert_eq!(clock.wall_clock_hhmmssms(0.0).unwrap(), "14:00:00:000");
    }

    #[test]
    fn negative_offsets_walk_backwards() {
        let clock = monaco_quali_clock();
        assert_eq!(clock.wall_clock_hhmmss(-60.0).unwrap(), "13:59:00");
    }

    #[test]
    fn missing_offset_is_missing_per_row() {
        let clock = monaco_quali_clock();
        assert_eq!(clock.wall_clock_hhmmssms(f64::NAN), None);
        assert_eq!(clock.wall_clock_hhmmss(f64::INFINITY), None);
    }

    #[test]
    fn naive_or_absent_start_yields_no_clock() {
        assert!(SessionClock::from_local_iso(None).is_none());
        assert!(SessionClock::from_local_iso(Some("")).is_none());
        // Naive timestamps carry no offset and are refused.
        assert!(SessionClock::from_local_iso(Some("2024-05-26T14:00:00")).is_none());
        assert!(SessionClock::from_local_iso(Some("garbage")).is_none());
    }

    #[test]
    fn projection_crossing_midnight_wraps_the_display() {
        let clock = SessionClock::from_local_iso(Some("2024-11-23T23:30:00-08:00")).unwrap();
        assert_eq!(clock.wall_clock_hhmmss(3_600.0).unwrap(), "00:30:00");
    }
}
