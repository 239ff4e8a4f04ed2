//! The routing table itself.
//!
//! One row per transformed column. This table is the single source of
//! truth for both pipeline directions; the write and read rules of each
//! row must agree per `WriteRule::decode_rule`, which the unit tests check
//! across the whole table.

use super::{ColumnRoute, ReadRule, RecordFile, WriteRule};

pub const ROUTES: &[ColumnRoute] = &[
    // session_results.csv: total race time carries hours, qualifying
    // segments never do, the interval column stays numeric.
    ColumnRoute {
        file: RecordFile::SessionResults,
        column: "Time",
        write: WriteRule::DurationHhMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::SessionResults,
        column: "Q1",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::SessionResults,
        column: "Q2",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::SessionResults,
        column: "Q3",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::SessionResults,
        column: "Interval",
        write: WriteRule::NumericSeconds,
        read: ReadRule::NumericSeconds,
    },
    // laps_data.csv: lap/sector durations are short intervals; the raw
    // "Time" stamp and pit lane crossings get full wall-clock precision,
    // per-sector session stamps and lap starts drop the milliseconds.
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "LapTime",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector1Time",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector2Time",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector3Time",
        write: WriteRule::DurationMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Time",
        write: WriteRule::WallClockHhMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "PitInTime",
        write: WriteRule::WallClockHhMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "PitOutTime",
        write: WriteRule::WallClockHhMmSsMs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector1SessionTime",
        write: WriteRule::WallClockHhMmSs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector2SessionTime",
        write: WriteRule::WallClockHhMmSs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "Sector3SessionTime",
        write: WriteRule::WallClockHhMmSs,
        read: ReadRule::DurationString,
    },
    ColumnRoute {
        file: RecordFile::LapsData,
        column: "LapStartTime",
        write: WriteRule::WallClockHhMmSs,
        read: ReadRule::DurationString,
    },
    // weather_data.csv
    ColumnRoute {
        file: RecordFile::WeatherData,
        column: "Time",
        write: WriteRule::WallClockHhMmSsMs,
        read: ReadRule::DurationString,
    },
    // lap_telemetry_summary.csv
    ColumnRoute {
        file: RecordFile::LapTelemetrySummary,
        column: "TelemetryLapStartTime_seconds",
        write: WriteRule::NumericSeconds,
        read: ReadRule::NumericSeconds,
    },
    // event_info.csv: calendar dates and session start instants.
    ColumnRoute {
        file: RecordFile::EventInfo,
        column: "EventDate",
        write: WriteRule::Iso8601,
        read: ReadRule::IsoInstant,
    },
    ColumnRoute {
        file: RecordFile::EventInfo,
        column: "SessionStartDateLocalISO",
        write: WriteRule::Iso8601,
        read: ReadRule::IsoInstant,
    },
    ColumnRoute {
        file: RecordFile::EventInfo,
        column: "SessionStartDateUTCISO",
        write: WriteRule::Iso8601,
        read: ReadRule::IsoInstant,
    },
];
