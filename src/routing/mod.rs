//! Column Router: the static assignment of time encodings to CSV columns.
//!
//! Every column that needs a time transformation is named here explicitly,
//! keyed by `{record file, column name}`; no wildcard or prefix matching.
//! Unregistered columns pass through unchanged on both the write and the
//! read side. The write rule and read rule live in one table row so their
//! consistency is a mechanical property (`WriteRule::decode_rule`) instead
//! of a convention spread across two code paths.

mod tables;

pub use tables::ROUTES;

use tracing::debug;

use crate::clock::SessionClock;
use crate::codec;
use crate::types::TimeEncoding;

/// Identity of an on-disk record file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordFile {
    SessionResults,
    LapsData,
    WeatherData,
    LapTelemetrySummary,
    TyreStints,
    EventInfo,
}

impl RecordFile {
    /// File name under the `{year}/{event}/{session}` directory.
    pub fn file_name(self) -> &'static str {
        match self {
            RecordFile::SessionResults => "session_results.csv",
            RecordFile::LapsData => "laps_data.csv",
            RecordFile::WeatherData => "weather_data.csv",
            RecordFile::LapTelemetrySummary => "lap_telemetry_summary.csv",
            RecordFile::TyreStints => "tyre_stints_summary.csv",
            RecordFile::EventInfo => "event_info.csv",
        }
    }

    /// Reverse lookup from an on-disk file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        match name {
            "session_results.csv" => Some(RecordFile::SessionResults),
            "laps_data.csv" => Some(RecordFile::LapsData),
            "weather_data.csv" => Some(RecordFile::WeatherData),
            "lap_telemetry_summary.csv" => Some(RecordFile::LapTelemetrySummary),
            "tyre_stints_summary.csv" => Some(RecordFile::TyreStints),
            "event_info.csv" => Some(RecordFile::EventInfo),
            _ => None,
        }
    }

    /// All record files, in the order they are written per session.
    pub fn all() -> [RecordFile; 6] {
        [
            RecordFile::EventInfo,
            RecordFile::SessionResults,
            RecordFile::LapsData,
            RecordFile::LapTelemetrySummary,
            RecordFile::WeatherData,
            RecordFile::TyreStints,
        ]
    }
}

/// Write-side rule: how a raw provider value becomes a cell string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteRule {
    /// Duration in `MM:SS:mmm`.
    DurationMmSsMs,
    /// Duration in `HH:MM:SS:mmm`.
    DurationHhMmSsMs,
    /// Session-relative offset projected onto the local clock, `HH:MM:SS:mmm`.
    WallClockHhMmSsMs,
    /// Session-relative offset projected onto the local clock, `HH:MM:SS`.
    WallClockHhMmSs,
    /// Plain numeric seconds, written as-is.
    NumericSeconds,
    /// Timezone-aware ISO-8601 instant string.
    Iso8601,
}

/// Read-side rule: which decode path recovers the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadRule {
    /// One of the three fixed-width duration shapes.
    DurationString,
    /// Generic ISO-8601 instant.
    IsoInstant,
    /// Direct numeric cast.
    NumericSeconds,
}

impl WriteRule {
    /// The decode path compatible with this write rule.
    ///
    /// Wall-clock strings share the duration shapes, so they read back
    /// through the same structural decoder.
    pub fn decode_rule(self) -> ReadRule {
        match self {
            WriteRule::DurationMmSsMs
            | WriteRule::DurationHhMmSsMs
            | WriteRule::WallClockHhMmSsMs
            | WriteRule::WallClockHhMmSs => ReadRule::DurationString,
            WriteRule::NumericSeconds => ReadRule::NumericSeconds,
            WriteRule::Iso8601 => ReadRule::IsoInstant,
        }
    }
}

/// One routing table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoute {
    pub file: RecordFile,
    pub column: &'static str,
    pub write: WriteRule,
    pub read: ReadRule,
}

/// Exact lookup for a single column. `None` means pass through unchanged.
pub fn route_for(file: RecordFile, column: &str) -> Option<&'static ColumnRoute> {
    ROUTES.iter().find(|route| route.file == file && route.column == column)
}

/// All routes registered for one record file, in table order.
pub fn routes_for_file(file: RecordFile) -> impl Iterator<Item = &'static ColumnRoute> {
    ROUTES.iter().filter(move |route| route.file == file)
}

/// Apply a route's write rule to a raw seconds value.
///
/// `None` in, `None` out; a non-finite value or a failed wall-clock
/// projection degrades that cell alone. Wall-clock rules require a session
/// clock; without one the whole column comes out missing, which is the
/// deliberate policy when the local session start is unknown.
pub fn encode_routed(
    route: &ColumnRoute,
    value: Option<f64>,
    clock: Option<&SessionClock>,
) -> Option<String> {
    let seconds = value?;
    match route.write {
        WriteRule::DurationMmSsMs => codec::encode_seconds(seconds, TimeEncoding::MmSsMs),
        WriteRule::DurationHhMmSsMs => codec::encode_seconds(seconds, TimeEncoding::HhMmSsMs),
        WriteRule::WallClockHhMmSsMs => clock?.wall_clock_hhmmssms(seconds),
        WriteRule::WallClockHhMmSs => clock?.wall_clock_hhmmss(seconds),
        WriteRule::NumericSeconds => seconds.is_finite().then(|| format_seconds(seconds)),
        WriteRule::Iso8601 => {
            debug!(column = route.column, "ISO-8601 columns are written from instants, not seconds");
            None
        }
    }
}

/// Encode one cell by `{file, column}` lookup.
///
/// Unregistered columns pass through as plain numbers.
pub fn encode_cell(
    file: RecordFile,
    column: &str,
    value: Option<f64>,
    clock: Option<&SessionClock>,
) -> Option<String> {
    match route_for(file, column) {
        Some(route) => encode_routed(route, value, clock),
        None => value.filter(|v| v.is_finite()).map(format_seconds),
    }
}

/// Canonicalize an ISO-8601 instant cell, coercing unparseable input to missing.
pub fn encode_iso_cell(value: Option<&str>) -> Option<String> {
    codec::decode_instant(value?).map(|instant| instant.canonical())
}

fn format_seconds(seconds: f64) -> String {
    seconds.to_string()
}
