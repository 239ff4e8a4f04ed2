//! Duration and instant encoders.
//!
//! All duration encoders share the same discipline: convert to integer
//! milliseconds first (round half away from zero), then decompose with
//! integer division and modulo only. Decomposing float seconds directly
//! accumulates drift: `59.9995` must come out as `01:00:000`, never
//! `00:59:1000`.

use chrono::{DateTime, FixedOffset, Timelike};
use tracing::debug;

use crate::types::{TimeEncoding, TimeSpan};

/// Encode a duration given in floating-point seconds.
///
/// Returns `None` for NaN/infinite input (the missing marker) and for the
/// [`TimeEncoding::Iso8601`] variant, which encodes instants, not
/// durations.
pub fn encode_seconds(seconds: f64, encoding: TimeEncoding) -> Option<String> {
    let span = TimeSpan::from_secs_f64(seconds)?;
    match encoding {
        TimeEncoding::MmSsMs => Some(format_mmssms(span)),
        TimeEncoding::HhMmSs => Some(format_hhmmss(span)),
        TimeEncoding::HhMmSsMs => Some(format_hhmmssms(span)),
        TimeEncoding::Iso8601 => {
            debug!(seconds, "ISO-8601 encodes instants, not durations; emitting missing");
            None
        }
    }
}

/// Format a span as `[sign]MM:SS:mmm`.
///
/// Minutes are zero-padded to two digits and widen only when the value
/// requires it.
pub fn format_mmssms(span: TimeSpan) -> String {
    let sign = if span.is_negative() { "-" } else { "" };
    let total = span.abs_millis();
    let minutes = total / 60_000;
    let remainder = total % 60_000;
    format!("{sign}{minutes:02}:{:02}:{:03}", remainder / 1_000, remainder % 1_000)
}

/// Format a span as `[sign]HH:MM:SS`, rounded to the nearest second.
pub fn format_hhmmss(span: TimeSpan) -> String {
    let sign = if span.is_negative() { "-" } else { "" };
    let total_seconds = (span.abs_millis() + 500) / 1_000;
    let hours = total_seconds / 3_600;
    let remainder = total_seconds % 3_600;
    format!("{sign}{hours:02}:{:02}:{:02}", remainder / 60, remainder % 60)
}

/// Format a span as `[sign]HH:MM:SS:mmm`.
pub fn format_hhmmssms(span: TimeSpan) -> String {
    let sign = if span.is_negative() { "-" } else { "" };
    let total = span.abs_millis();
    let hours = total / 3_600_000;
    let after_hours = total % 3_600_000;
    let minutes = after_hours / 60_000;
    let after_minutes = after_hours % 60_000;
    format!(
        "{sign}{hours:02}:{minutes:02}:{:02}:{:03}",
        after_minutes / 1_000,
        after_minutes % 1_000
    )
}

/// Format an absolute instant as `HH:MM:SS:mmm` local wall-clock.
///
/// The instant is expected to already carry the session's local offset;
/// no sign is ever emitted.
pub fn format_instant_hhmmssms(instant: &DateTime<FixedOffset>) -> String {
    format!(
        "{:02}:{:02}:{:02}:{:03}",
        instant.hour(),
        instant.minute(),
        instant.second(),
        instant.timestamp_subsec_millis()
    )
}

/// Format an absolute instant as `HH:MM:SS` local wall-clock.
pub fn format_instant_hhmmss(instant: &DateTime<FixedOffset>) -> String {
    format!("{:02}:{:02}:{:02}", instant.hour(), instant.minute(), instant.second())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmssms_scenarios() {
        assert_eq!(encode_seconds(89.567, TimeEncoding::MmSsMs).unwrap(), "01:29:567");
        assert_eq!(encode_seconds(-5.25, TimeEncoding::MmSsMs).unwrap(), "-00:05:250");
        assert_eq!(encode_seconds(0.0, TimeEncoding::MmSsMs).unwrap(), "00:00:000");
    }

    #[test]
    fn mmssms_minutes_widen_past_two_digits() {
        // 100 minutes and beyond widen the leading group instead of wrapping.
        assert_eq!(encode_seconds(6_000.5, TimeEncoding::MmSsMs).unwrap(), "100:00:500");
    }

    #[test]
    fn mmssms_rounds_on_millis_not_on_float_seconds() {
        assert_eq!(encode_seconds(59.9995, TimeEncoding::MmSsMs).unwrap(), "01:00:000");
    }

    #[test]
    fn hhmmssms_scenarios() {
        assert_eq!(encode_seconds(3_690.123, TimeEncoding::HhMmSsMs).unwrap(), "01:01:30:123");
        assert_eq!(encode_seconds(-3_690.123, TimeEncoding::HhMmSsMs).unwrap(), "-01:01:30:123");
    }

    #[test]
    fn hhmmss_rounds_to_nearest_second() {
        assert_eq!(encode_seconds(61.7, TimeEncoding::HhMmSs).unwrap(), "00:01:02");
        assert_eq!(encode_seconds(61.4, TimeEncoding::HhMmSs).unwrap(), "00:01:01");
        assert_eq!(encode_seconds(-61.7, TimeEncoding::HhMmSs).unwrap(), "-00:01:02");
    }

    #[test]
    fn missing_propagates_for_every_variant() {
        for encoding in [TimeEncoding::MmSsMs, TimeEncoding::HhMmSs, TimeEncoding::HhMmSsMs] {
            assert_eq!(encode_seconds(f64::NAN, encoding), None);
            assert_eq!(encode_seconds(f64::INFINITY, encoding), None);
        }
    }

    #[test]
    fn iso_variant_never_encodes_durations() {
        assert_eq!(encode_seconds(12.0, TimeEncoding::Iso8601), None);
    }

    #[test]
    fn instant_formatting() {
        let instant = DateTime::parse_from_rfc3339("2024-05-26T14:02:05.400+02:00").unwrap();
        assert_eq!(format_instant_hhmmssms(&instant), "14:02:05:400");
        assert_eq!(format_instant_hhmmss(&instant), "14:02:05");
    }
}
