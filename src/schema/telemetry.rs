//! Per-lap telemetry summary record.

use serde::{Deserialize, Serialize};

/// One row of `lap_telemetry_summary.csv`, condensing a lap's telemetry
/// channel samples into scalar aggregates.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LapTelemetrySummary {
    pub driver: Option<String>,
    pub team: Option<String>,
    pub team_name: Option<String>,
    pub lap_number: Option<u32>,
    /// Count of gear transitions across consecutive samples.
    pub total_gear_changes: Option<u32>,
    /// Raw session-relative lap start, numeric seconds.
    #[serde(rename = "TelemetryLapStartTime_seconds")]
    pub telemetry_lap_start_time_seconds: Option<String>,
    pub avg_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_speed: Option<f64>,
    #[serde(rename = "AvgRPM")]
    pub avg_rpm: Option<f64>,
    #[serde(rename = "MaxRPM")]
    pub max_rpm: Option<f64>,
    pub avg_throttle: Option<f64>,
    /// Fraction of samples with the brake applied.
    pub avg_brake: Option<f64>,
    /// Distance covered over the lap, metres.
    pub max_distance: Option<f64>,
    /// Whether DRS was open at any point in the lap.
    #[serde(rename = "DRSActive")]
    pub drs_active: bool,
}
