//! Provider trait and raw payload types for session data sources.
//!
//! Providers abstract over where session data comes from (a local archive,
//! a recorded dump, a future live client) and normalize their native
//! duration and timestamp objects to plain seconds at this boundary. The
//! trait is deliberately small: list a year's events, load one session.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Trait for session data sources.
#[async_trait]
pub trait SessionProvider: Send + 'static {
    /// List the event names available for a championship year.
    async fn events(&mut self, year: i32) -> Result<Vec<String>>;

    /// Load one session of one event.
    ///
    /// Returns:
    /// - `Ok(session)` - Raw session payload ready for extraction
    /// - `Err(e)` - Load failure; the batch runner skips the session
    async fn load(&mut self, year: i32, event: &str, session_key: &str) -> Result<LoadedSession>;
}

/// Raw payload for one loaded session.
///
/// Every duration or timestamp field is already reduced to `Option<f64>`
/// seconds (durations, session-relative offsets) or an ISO string
/// (calendar instants); `None` is the provider's missing value.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct LoadedSession {
    pub event: RawEvent,
    pub results: Vec<RawResultRow>,
    pub laps: Vec<RawLapRow>,
    pub weather: Vec<RawWeatherRow>,
    pub telemetry: Vec<RawLapTelemetry>,
}

/// Event metadata as delivered by the provider.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawEvent {
    pub year: i32,
    pub event_name: Option<String>,
    /// Event calendar date, ISO-8601.
    pub event_date: Option<String>,
    pub country: Option<String>,
    pub location: Option<String>,
    pub session_key: String,
    pub session_name: Option<String>,
    /// Local session start, timezone-aware ISO-8601 when known.
    #[serde(rename = "SessionStartLocalISO")]
    pub session_start_local_iso: Option<String>,
    /// UTC session start, ISO-8601 when known.
    #[serde(rename = "SessionStartUTCISO")]
    pub session_start_utc_iso: Option<String>,
}

/// One classification row as delivered by the provider.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawResultRow {
    pub driver_number: Option<String>,
    pub abbreviation: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    pub position: Option<u32>,
    pub classified_position: Option<String>,
    pub grid_position: Option<u32>,
    pub status: Option<String>,
    pub points: Option<f64>,
    /// Total race time, seconds.
    pub time_seconds: Option<f64>,
    /// Qualifying segment durations, seconds.
    pub q1_seconds: Option<f64>,
    pub q2_seconds: Option<f64>,
    pub q3_seconds: Option<f64>,
    /// Gap to the car ahead, seconds.
    pub interval_seconds: Option<f64>,
}

/// One lap row as delivered by the provider. Offsets are session-relative.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawLapRow {
    pub driver: Option<String>,
    pub driver_number: Option<String>,
    pub team: Option<String>,
    pub lap_number: Option<u32>,
    pub stint: Option<u32>,
    pub compound: Option<String>,
    pub tyre_life: Option<f64>,
    pub fresh_tyre: Option<bool>,
    pub position: Option<u32>,
    pub track_status: Option<String>,
    pub is_accurate: Option<bool>,
    #[serde(rename = "SpeedI1")]
    pub speed_i1: Option<f64>,
    #[serde(rename = "SpeedI2")]
    pub speed_i2: Option<f64>,
    #[serde(rename = "SpeedFL")]
    pub speed_fl: Option<f64>,
    #[serde(rename = "SpeedST")]
    pub speed_st: Option<f64>,
    pub lap_time_seconds: Option<f64>,
    pub sector1_time_seconds: Option<f64>,
    pub sector2_time_seconds: Option<f64>,
    pub sector3_time_seconds: Option<f64>,
    /// Session-relative stamp of the lap's completion.
    pub time_seconds: Option<f64>,
    pub pit_in_time_seconds: Option<f64>,
    pub pit_out_time_seconds: Option<f64>,
    pub sector1_session_time_seconds: Option<f64>,
    pub sector2_session_time_seconds: Option<f64>,
    pub sector3_session_time_seconds: Option<f64>,
    pub lap_start_time_seconds: Option<f64>,
}

/// One weather sample as delivered by the provider.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawWeatherRow {
    /// Session-relative sample stamp, seconds.
    pub time_seconds: Option<f64>,
    pub air_temp: Option<f64>,
    pub track_temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub rainfall: Option<bool>,
    pub wind_direction: Option<u32>,
    pub wind_speed: Option<f64>,
}

/// Telemetry channel samples for one lap of one driver.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct RawLapTelemetry {
    pub driver: Option<String>,
    pub team: Option<String>,
    pub team_name: Option<String>,
    pub lap_number: Option<u32>,
    pub samples: Vec<TelemetrySample>,
}

/// One telemetry sample point.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
#[serde(default)]
pub struct TelemetrySample {
    /// Session-relative sample stamp, seconds.
    pub time_seconds: Option<f64>,
    /// Speed, km/h.
    pub speed: Option<f64>,
    pub rpm: Option<f64>,
    /// Throttle application, percent.
    pub throttle: Option<f64>,
    pub brake: Option<bool>,
    pub gear: Option<i8>,
    /// DRS status code; 8 and above means the flap is open.
    pub drs: Option<u8>,
    /// Distance from the lap start, metres, when the provider supplies it.
    pub distance: Option<f64>,
}
