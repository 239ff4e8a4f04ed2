//! Per-lap timing record.

use serde::{Deserialize, Serialize};

/// One row of `laps_data.csv`.
///
/// Lap and sector durations are `MM:SS:mmm`; `Time` and the pit lane
/// crossings are full-precision local wall-clock stamps; the per-sector
/// session stamps and `LapStartTime` are wall-clock without milliseconds.
/// When the session's local start instant is unknown every wall-clock cell
/// in the file is missing.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LapRecord {
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
    /// Speed trap readings, km/h. Not time columns; pass through untouched.
    #[serde(rename = "SpeedI1")]
    pub speed_i1: Option<f64>,
    #[serde(rename = "SpeedI2")]
    pub speed_i2: Option<f64>,
    #[serde(rename = "SpeedFL")]
    pub speed_fl: Option<f64>,
    #[serde(rename = "SpeedST")]
    pub speed_st: Option<f64>,
    pub lap_time: Option<String>,
    pub sector1_time: Option<String>,
    pub sector2_time: Option<String>,
    pub sector3_time: Option<String>,
    pub time: Option<String>,
    pub pit_in_time: Option<String>,
    pub pit_out_time: Option<String>,
    pub sector1_session_time: Option<String>,
    pub sector2_session_time: Option<String>,
    pub sector3_session_time: Option<String>,
    pub lap_start_time: Option<String>,
}
