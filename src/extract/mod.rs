//! Write-side pipeline: one loaded session in, six CSV files out.
//!
//! Every routed time cell goes through the Column Router; nothing in this
//! module chooses an encoding on its own. Failure semantics are layered:
//! a bad value degrades its own cell, an absent column is simply absent,
//! an empty record set skips its file, and only output-directory setup
//! failures escape as fatal errors.

pub mod stints;
pub mod telemetry;

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::clock::SessionClock;
use crate::provider::{LoadedSession, RawLapRow, RawResultRow, RawWeatherRow};
use crate::routing::{RecordFile, encode_cell, encode_iso_cell};
use crate::schema::{EventInfo, LapRecord, ResultRecord, WeatherRecord};
use crate::{Result, TimingError};

/// What was written for one record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file: RecordFile,
    pub rows: usize,
}

/// Result of extracting one session.
#[derive(Debug, Clone)]
pub struct SessionExtract {
    /// Directory the files were written to.
    pub dir: PathBuf,
    /// Files actually written, in write order.
    pub files: Vec<FileSummary>,
}

/// Extract one session into CSV files under
/// `{output_root}/{year}/{event}/{session}`.
pub fn extract_session(session: &LoadedSession, output_root: &Path) -> Result<SessionExtract> {
    let event = &session.event;
    let event_dir = sanitize_component(event.event_name.as_deref().unwrap_or("Unknown_Event"));
    let session_dir = sanitize_component(
        event.session_name.as_deref().unwrap_or(event.session_key.as_str()),
    );
    let dir = output_root.join(event.year.to_string()).join(event_dir).join(session_dir);

    std::fs::create_dir_all(&dir).map_err(|e| TimingError::output_setup(dir.clone(), e))?;

    let clock = SessionClock::from_local_iso(event.session_start_local_iso.as_deref());
    if clock.is_none() {
        warn!(
            year = event.year,
            event = event.event_name.as_deref().unwrap_or("?"),
            session = %event.session_key,
            "local session start unknown; wall-clock columns will be missing"
        );
    }

    let mut files = Vec::new();

    let event_record = build_event_info(session);
    write_file(&dir, RecordFile::EventInfo, &[event_record], &mut files)?;

    let results: Vec<ResultRecord> =
        session.results.iter().map(|row| build_result(row)).collect();
    write_file(&dir, RecordFile::SessionResults, &results, &mut files)?;

    let laps: Vec<LapRecord> =
        session.laps.iter().map(|row| build_lap(row, clock.as_ref())).collect();
    write_file(&dir, RecordFile::LapsData, &laps, &mut files)?;

    let summaries: Vec<_> = session
        .telemetry
        .iter()
        .filter_map(|lap| {
            let summary = telemetry::summarize_lap(lap);
            if summary.is_none() {
                debug!(
                    driver = lap.driver.as_deref().unwrap_or("?"),
                    lap = lap.lap_number,
                    "no telemetry samples for lap; skipping summary row"
                );
            }
            summary
        })
        .collect();
    write_file(&dir, RecordFile::LapTelemetrySummary, &summaries, &mut files)?;

    let weather: Vec<WeatherRecord> =
        session.weather.iter().map(|row| build_weather(row, clock.as_ref())).collect();
    write_file(&dir, RecordFile::WeatherData, &weather, &mut files)?;

    let stint_rows = stints::derive_stints(&session.laps);
    write_file(&dir, RecordFile::TyreStints, &stint_rows, &mut files)?;

    info!(
        dir = %dir.display(),
        files = files.len(),
        "session extracted"
    );

    Ok(SessionExtract { dir, files })
}

/// Replace path-hostile characters in an event or session name.
pub fn sanitize_component(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

fn build_event_info(session: &LoadedSession) -> EventInfo {
    let event = &session.event;
    EventInfo {
        year: event.year,
        event_name: event.event_name.clone(),
        event_date: encode_iso_cell(event.event_date.as_deref()),
        country: event.country.clone(),
        location: event.location.clone(),
        session_key: event.session_key.clone(),
        session_name_actual: event.session_name.clone(),
        session_start_date_local_iso: encode_iso_cell(event.session_start_local_iso.as_deref()),
        session_start_date_utc_iso: encode_iso_cell(event.session_start_utc_iso.as_deref()),
    }
}

fn build_result(row: &RawResultRow) -> ResultRecord {
    let file = RecordFile::SessionResults;
    ResultRecord {
        driver_number: row.driver_number.clone(),
        abbreviation: row.abbreviation.clone(),
        full_name: row.full_name.clone(),
        team_name: row.team_name.clone(),
        position: row.position,
        classified_position: row.classified_position.clone(),
        grid_position: row.grid_position,
        status: row.status.clone(),
        points: row.points,
        time: encode_cell(file, "Time", row.time_seconds, None),
        q1: encode_cell(file, "Q1", row.q1_seconds, None),
        q2: encode_cell(file, "Q2", row.q2_seconds, None),
        q3: encode_cell(file, "Q3", row.q3_seconds, None),
        interval: encode_cell(file, "Interval", row.interval_seconds, None),
    }
}

fn build_lap(row: &RawLapRow, clock: Option<&SessionClock>) -> LapRecord {
    let file = RecordFile::LapsData;
    LapRecord {
        driver: row.driver.clone(),
        driver_number: row.driver_number.clone(),
        team: row.team.clone(),
        lap_number: row.lap_number,
        stint: row.stint,
        compound: row.compound.clone(),
        tyre_life: row.tyre_life,
        fresh_tyre: row.fresh_tyre,
        position: row.position,
        track_status: row.track_status.clone(),
        is_accurate: row.is_accurate,
        speed_i1: row.speed_i1,
        speed_i2: row.speed_i2,
        speed_fl: row.speed_fl,
        speed_st: row.speed_st,
        lap_time: encode_cell(file, "LapTime", row.lap_time_seconds, None),
        sector1_time: encode_cell(file, "Sector1Time", row.sector1_time_seconds, None),
        sector2_time: encode_cell(file, "Sector2Time", row.sector2_time_seconds, None),
        sector3_time: encode_cell(file, "Sector3Time", row.sector3_time_seconds, None),
        time: encode_cell(file, "Time", row.time_seconds, clock),
        pit_in_time: encode_cell(file, "PitInTime", row.pit_in_time_seconds, clock),
        pit_out_time: encode_cell(file, "PitOutTime", row.pit_out_time_seconds, clock),
        sector1_session_time: encode_cell(
            file,
            "Sector1SessionTime",
            row.sector1_session_time_seconds,
            clock,
        ),
        sector2_session_time: encode_cell(
            file,
            "Sector2SessionTime",
            row.sector2_session_time_seconds,
            clock,
        ),
        sector3_session_time: encode_cell(
            file,
            "Sector3SessionTime",
            row.sector3_session_time_seconds,
            clock,
        ),
        lap_start_time: encode_cell(file, "LapStartTime", row.lap_start_time_seconds, clock),
    }
}

fn build_weather(row: &RawWeatherRow, clock: Option<&SessionClock>) -> WeatherRecord {
    WeatherRecord {
        time: encode_cell(RecordFile::WeatherData, "Time", row.time_seconds, clock),
        air_temp: row.air_temp,
        track_temp: row.track_temp,
        humidity: row.humidity,
        pressure: row.pressure,
        rainfall: row.rainfall,
        wind_direction: row.wind_direction,
        wind_speed: row.wind_speed,
    }
}

/// Write one record file, skipping it when there is nothing to write.
fn write_file<T: Serialize>(
    dir: &Path,
    file: RecordFile,
    records: &[T],
    files: &mut Vec<FileSummary>,
) -> Result<()> {
    if records.is_empty() {
        debug!(file = file.file_name(), "no records; file skipped");
        return Ok(());
    }

    let path = dir.join(file.file_name());
    let mut writer =
        csv::Writer::from_path(&path).map_err(|e| TimingError::csv_error(path.clone(), e))?;
    for record in records {
        writer.serialize(record).map_err(|e| TimingError::csv_error(path.clone(), e))?;
    }
    writer.flush().map_err(|e| TimingError::file_error(path.clone(), e))?;

    files.push(FileSummary { file, rows: records.len() });
    Ok(())
}
