//! Decoders for the fixed-width time strings.
//!
//! Duration decoding tries the three duration shapes in a fixed priority
//! order (`HH:MM:SS:mmm`, then `MM:SS:mmm`, then `HH:MM:SS`) against the whole
//! string. The group counts keep the shapes disjoint: four groups is always
//! the full form, three groups ending in a three-digit group is always
//! minutes-first. A string that matches none of them decodes to missing;
//! the offending value is logged and the caller keeps the original cell
//! around for inspection.

use std::sync::LazyLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use regex::Regex;
use tracing::debug;

use crate::types::TimeSpan;

// Leading groups accept two or more digits so encoder-widened values
// (e.g. 100+ minute red-flag gaps) still round-trip.
static HHMMSSMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d{2,}):(\d{2}):(\d{2}):(\d{3})$").unwrap());
static MMSSMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d{2,}):(\d{2}):(\d{3})$").unwrap());
static HHMMSS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d{2,}):(\d{2}):(\d{2})$").unwrap());

/// Decode a fixed-width duration string back into a span.
///
/// Empty, whitespace-only and `nan`/`nat` tokens (any case) are missing
/// values, not parse failures. Anything else that matches none of the three
/// duration shapes also decodes to missing, logged at debug level.
pub fn decode_duration(raw: &str) -> Option<TimeSpan> {
    let value = raw.trim();
    if is_missing_token(value) {
        return None;
    }

    if let Some(caps) = HHMMSSMS_RE.captures(value) {
        let hours: i64 = caps[2].parse().ok()?;
        let minutes: i64 = caps[3].parse().ok()?;
        let seconds: i64 = caps[4].parse().ok()?;
        let millis: i64 = caps[5].parse().ok()?;
        return Some(signed(&caps[1], hours * 3_600_000 + minutes * 60_000 + seconds * 1_000 + millis));
    }

    if let Some(caps) = MMSSMS_RE.captures(value) {
        let minutes: i64 = caps[2].parse().ok()?;
        let seconds: i64 = caps[3].parse().ok()?;
        let millis: i64 = caps[4].parse().ok()?;
        return Some(signed(&caps[1], minutes * 60_000 + seconds * 1_000 + millis));
    }

    if let Some(caps) = HHMMSS_RE.captures(value) {
        let hours: i64 = caps[2].parse().ok()?;
        let minutes: i64 = caps[3].parse().ok()?;
        let seconds: i64 = caps[4].parse().ok()?;
        return Some(signed(&caps[1], hours * 3_600_000 + minutes * 60_000 + seconds * 1_000));
    }

    debug!(value = %raw, "time string matched no duration encoding");
    None
}

fn signed(sign: &str, millis: i64) -> TimeSpan {
    if sign == "-" { TimeSpan::from_millis(-millis) } else { TimeSpan::from_millis(millis) }
}

fn is_missing_token(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("nan") || value.eq_ignore_ascii_case("nat")
}

/// A decoded ISO-8601 instant.
///
/// Session start columns carry an explicit offset; event calendar dates are
/// naive. Both canonicalize back to a stable string form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoInstant {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl IsoInstant {
    /// Canonical string form written back to transformed files.
    pub fn canonical(&self) -> String {
        match self {
            IsoInstant::Zoned(instant) => instant.to_rfc3339(),
            IsoInstant::Naive(instant) => instant.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }
}

/// Decode a generic ISO-8601 timestamp string, coercing failures to missing.
pub fn decode_instant(raw: &str) -> Option<IsoInstant> {
    let value = raw.trim();
    if is_missing_token(value) {
        return None;
    }

    if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
        return Some(IsoInstant::Zoned(zoned));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(IsoInstant::Naive(naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(IsoInstant::Naive(date.and_hms_opt(0, 0, 0)?));
    }

    debug!(value = %raw, "timestamp string did not parse as ISO-8601");
    None
}

/// Decode a plain numeric-seconds cell, coercing failures to missing.
///
/// These columns never carry the custom string shapes; they bypass
/// structural matching entirely.
pub fn decode_numeric_seconds(raw: &str) -> Option<TimeSpan> {
    let value = raw.trim();
    if is_missing_token(value) {
        return None;
    }
    value.parse::<f64>().ok().and_then(TimeSpan::from_secs_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode::{format_hhmmss, format_hhmmssms, format_mmssms};
    use proptest::prelude::*;

    #[test]
    fn decodes_all_three_duration_shapes() {
        assert_eq!(decode_duration("01:29:567"), Some(TimeSpan::from_millis(89_567)));
        assert_eq!(decode_duration("01:01:30:123"), Some(TimeSpan::from_millis(3_690_123)));
        assert_eq!(decode_duration("00:01:02"), Some(TimeSpan::from_millis(62_000)));
    }

    #[test]
    fn sign_is_preserved() {
        assert_eq!(decode_duration("-00:05:250"), Some(TimeSpan::from_millis(-5_250)));
        assert_eq!(decode_duration("-01:02:03"), Some(TimeSpan::from_millis(-3_723_000)));
        assert_eq!(decode_duration("-00:00:00:001"), Some(TimeSpan::from_millis(-1)));
    }

    #[test]
    fn ambiguous_three_group_shape_resolves_to_minutes_first() {
        // Three groups with a three-digit tail is always MM:SS:mmm; the
        // full form needs four groups, so this cannot be one hour.
        assert_eq!(decode_duration("01:02:003"), Some(TimeSpan::from_millis(62_003)));
    }

    #[test]
    fn widened_leading_group_round_trips() {
        assert_eq!(decode_duration("100:00:500"), Some(TimeSpan::from_millis(6_000_500)));
        assert_eq!(decode_duration("123:45:678"), Some(TimeSpan::from_millis(7_425_678)));
    }

    #[test]
    fn missing_tokens_are_missing_not_failures() {
        for token in ["", "   ", "nan", "NaN", "NAN", "nat", "NaT"] {
            assert_eq!(decode_duration(token), None, "token {token:?}");
            assert_eq!(decode_numeric_seconds(token), None, "token {token:?}");
            assert!(decode_instant(token).is_none(), "token {token:?}");
        }
    }

    #[test]
    fn garbage_decodes_to_missing() {
        for value in ["1:02:003", "01:2:003", "01:02:03:4", "abc", "01:02", "01-02-003", "+01:02:003"] {
            assert_eq!(decode_duration(value), None, "value {value:?}");
        }
    }

    #[test]
    fn numeric_seconds_casts_directly() {
        assert_eq!(decode_numeric_seconds("89.567"), Some(TimeSpan::from_millis(89_567)));
        assert_eq!(decode_numeric_seconds("-1.5"), Some(TimeSpan::from_millis(-1_500)));
        assert_eq!(decode_numeric_seconds("not a number"), None);
    }

    #[test]
    fn instants_parse_zoned_naive_and_bare_date() {
        let zoned = decode_instant("2024-05-26T14:00:00+02:00").unwrap();
        assert_eq!(zoned.canonical(), "2024-05-26T14:00:00+02:00");

        let naive = decode_instant("2024-05-26T14:00:00").unwrap();
        assert_eq!(naive.canonical(), "2024-05-26T14:00:00");

        let date = decode_instant("2024-05-26").unwrap();
        assert_eq!(date.canonical(), "2024-05-26T00:00:00");

        assert!(decode_instant("26/05/2024").is_none());
    }

    proptest! {
        #[test]
        fn hhmmssms_round_trips_within_a_day(millis in -86_400_000i64..=86_400_000i64) {
            let span = TimeSpan::from_millis(millis);
            let encoded = format_hhmmssms(span);
            prop_assert_eq!(decode_duration(&encoded), Some(span));
        }

        #[test]
        fn mmssms_round_trips_under_one_hundred_minutes(millis in -5_999_999i64..=5_999_999i64) {
            let span = TimeSpan::from_millis(millis);
            let encoded = format_mmssms(span);
            prop_assert_eq!(decode_duration(&encoded), Some(span));
        }

        #[test]
        fn hhmmss_truncates_to_whole_seconds(millis in -86_400_000i64..=86_400_000i64) {
            let span = TimeSpan::from_millis(millis);
            let encoded = format_hhmmss(span);
            let decoded = decode_duration(&encoded).unwrap();
            prop_assert_eq!(decoded.as_millis() % 1_000, 0);
            prop_assert!((decoded.as_millis() - span.as_millis()).abs() <= 500);
        }
    }

    #[test]
    fn truncation_law_scenario() {
        let encoded = format_hhmmss(TimeSpan::from_millis(61_700));
        assert_eq!(encoded, "00:01:02");
        assert_eq!(decode_duration(&encoded), Some(TimeSpan::from_millis(62_000)));
    }
}
