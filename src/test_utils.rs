//! Test utilities: sample sessions and archive fixtures.
//!
//! Shared by the unit tests and the criterion benches, which is why this
//! module is compiled for the `benchmark` feature as well.

#![cfg(any(test, feature = "benchmark"))]

use std::path::Path;

use anyhow::{Context, Result};

use crate::provider::{
    LoadedSession, RawEvent, RawLapRow, RawLapTelemetry, RawResultRow, RawWeatherRow,
    TelemetrySample,
};

/// A small but fully populated qualifying session: two drivers, three laps,
/// weather samples and one lap of telemetry. The local start instant is
/// `2024-05-26T14:00:00+02:00`, so a 125.4 s offset lands on
/// `14:02:05:400`.
pub fn sample_session() -> LoadedSession {
    LoadedSession {
        event: RawEvent {
            year: 2024,
            event_name: Some("Monaco Grand Prix".into()),
            event_date: Some("2024-05-26".into()),
            country: Some("Monaco".into()),
            location: Some("Monte Carlo".into()),
            session_key: "Q".into(),
            session_name: Some("Qualifying".into()),
            session_start_local_iso: Some("2024-05-26T14:00:00+02:00".into()),
            session_start_utc_iso: Some("2024-05-26T12:00:00+00:00".into()),
        },
        results: vec![
            RawResultRow {
                driver_number: Some("1".into()),
                abbreviation: Some("VER".into()),
                full_name: Some("Max Verstappen".into()),
                team_name: Some("Red Bull Racing".into()),
                position: Some(1),
                classified_position: Some("1".into()),
                grid_position: Some(1),
                status: Some("Finished".into()),
                points: Some(0.0),
                time_seconds: Some(4_230.456),
                q1_seconds: Some(71.123),
                q2_seconds: Some(70.654),
                q3_seconds: Some(70.270),
                interval_seconds: None,
            },
            RawResultRow {
                driver_number: Some("16".into()),
                abbreviation: Some("LEC".into()),
                full_name: Some("Charles Leclerc".into()),
                team_name: Some("Ferrari".into()),
                position: Some(2),
                classified_position: Some("2".into()),
                grid_position: Some(2),
                status: Some("Finished".into()),
                points: Some(0.0),
                time_seconds: Some(4_230.771),
                q1_seconds: Some(71.511),
                q2_seconds: Some(70.803),
                q3_seconds: Some(70.584),
                interval_seconds: Some(0.315),
            },
        ],
        laps: vec![
            RawLapRow {
                driver: Some("VER".into()),
                driver_number: Some("1".into()),
                team: Some("Red Bull Racing".into()),
                lap_number: Some(1),
                stint: Some(1),
                compound: Some("SOFT".into()),
                tyre_life: Some(1.0),
                fresh_tyre: Some(true),
                position: Some(1),
                track_status: Some("1".into()),
                is_accurate: Some(true),
                speed_i1: Some(271.0),
                speed_i2: Some(198.0),
                speed_fl: Some(282.0),
                speed_st: Some(289.0),
                lap_time_seconds: Some(78.241),
                sector1_time_seconds: Some(26.103),
                sector2_time_seconds: Some(33.497),
                sector3_time_seconds: Some(18.641),
                time_seconds: Some(125.4),
                pit_in_time_seconds: None,
                pit_out_time_seconds: Some(47.159),
                sector1_session_time_seconds: Some(73.262),
                sector2_session_time_seconds: Some(106.759),
                sector3_session_time_seconds: Some(125.4),
                lap_start_time_seconds: Some(47.159),
            },
            RawLapRow {
                driver: Some("VER".into()),
                driver_number: Some("1".into()),
                team: Some("Red Bull Racing".into()),
                lap_number: Some(2),
                stint: Some(1),
                compound: Some("SOFT".into()),
                tyre_life: Some(2.0),
                fresh_tyre: Some(false),
                position: Some(1),
                track_status: Some("1".into()),
                is_accurate: Some(true),
                speed_i1: Some(273.5),
                speed_i2: Some(199.2),
                speed_fl: Some(284.1),
                speed_st: Some(290.3),
                lap_time_seconds: Some(77.986),
                sector1_time_seconds: Some(25.991),
                sector2_time_seconds: Some(33.402),
                sector3_time_seconds: Some(18.593),
                time_seconds: Some(203.386),
                pit_in_time_seconds: Some(231.002),
                pit_out_time_seconds: None,
                sector1_session_time_seconds: Some(151.391),
                sector2_session_time_seconds: Some(184.793),
                sector3_session_time_seconds: Some(203.386),
                lap_start_time_seconds: Some(125.4),
            },
            RawLapRow {
                driver: Some("LEC".into()),
                driver_number: Some("16".into()),
                team: Some("Ferrari".into()),
                lap_number: Some(1),
                stint: Some(1),
                compound: Some("MEDIUM".into()),
                tyre_life: Some(1.0),
                fresh_tyre: Some(true),
                position: Some(2),
                track_status: Some("1".into()),
                is_accurate: Some(true),
                speed_i1: Some(268.9),
                speed_i2: Some(196.4),
                speed_fl: Some(280.7),
                speed_st: Some(287.8),
                lap_time_seconds: Some(78.998),
                sector1_time_seconds: Some(26.411),
                sector2_time_seconds: Some(33.788),
                sector3_time_seconds: Some(18.799),
                time_seconds: Some(131.07),
                pit_in_time_seconds: None,
                pit_out_time_seconds: Some(52.072),
                sector1_session_time_seconds: Some(78.483),
                sector2_session_time_seconds: Some(112.271),
                sector3_session_time_seconds: Some(131.07),
                lap_start_time_seconds: Some(52.072),
            },
        ],
        weather: vec![
            RawWeatherRow {
                time_seconds: Some(0.0),
                air_temp: Some(24.1),
                track_temp: Some(41.3),
                humidity: Some(58.0),
                pressure: Some(1013.2),
                rainfall: Some(false),
                wind_direction: Some(210),
                wind_speed: Some(1.8),
            },
            RawWeatherRow {
                time_seconds: Some(60.0),
                air_temp: Some(24.3),
                track_temp: Some(41.8),
                humidity: Some(57.0),
                pressure: Some(1013.1),
                rainfall: Some(false),
                wind_direction: Some(215),
                wind_speed: Some(2.1),
            },
        ],
        telemetry: vec![RawLapTelemetry {
            driver: Some("VER".into()),
            team: Some("Red Bull Racing".into()),
            team_name: Some("Red Bull Racing".into()),
            lap_number: Some(1),
            samples: vec![
                TelemetrySample {
                    time_seconds: Some(47.159),
                    speed: Some(94.0),
                    rpm: Some(9_800.0),
                    throttle: Some(42.0),
                    brake: Some(false),
                    gear: Some(2),
                    drs: Some(0),
                    distance: None,
                },
                TelemetrySample {
                    time_seconds: Some(48.159),
                    speed: Some(161.0),
                    rpm: Some(10_900.0),
                    throttle: Some(100.0),
                    brake: Some(false),
                    gear: Some(4),
                    drs: Some(0),
                    distance: None,
                },
                TelemetrySample {
                    time_seconds: Some(49.159),
                    speed: Some(212.0),
                    rpm: Some(11_600.0),
                    throttle: Some(100.0),
                    brake: Some(false),
                    gear: Some(6),
                    drs: Some(10),
                    distance: None,
                },
            ],
        }],
    }
}

/// The same session with the local start instant removed, for exercising
/// the all-missing wall-clock policy.
pub fn sample_session_without_local_start() -> LoadedSession {
    let mut session = sample_session();
    session.event.session_start_local_iso = None;
    session
}

/// Write a session into an archive tree as the archive provider expects:
/// `{root}/{year}/{event name}/{session key}.yaml`.
pub fn write_archive_session(root: &Path, session: &LoadedSession) -> Result<()> {
    let event_name =
        session.event.event_name.as_deref().context("sample session has no event name")?;
    let dir = root.join(session.event.year.to_string()).join(event_name);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating archive dirs under {}", dir.display()))?;

    let yaml = serde_yaml_ng::to_string(session).context("serializing session dump")?;
    let path = dir.join(format!("{}.yaml", session.event.session_key));
    std::fs::write(&path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
