//! Classification record for one driver in one session.

use serde::{Deserialize, Serialize};

/// One classification row of `session_results.csv`.
///
/// `Time` is the total race time in `HH:MM:SS:mmm`, the qualifying
/// segments are `MM:SS:mmm`, and `Interval` stays in raw numeric seconds,
/// all assigned by the routing table.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRecord {
    pub driver_number: Option<String>,
    pub abbreviation: Option<String>,
    pub full_name: Option<String>,
    pub team_name: Option<String>,
    pub position: Option<u32>,
    pub classified_position: Option<String>,
    pub grid_position: Option<u32>,
    pub status: Option<String>,
    pub points: Option<f64>,
    pub time: Option<String>,
    pub q1: Option<String>,
    pub q2: Option<String>,
    pub q3: Option<String>,
    pub interval: Option<String>,
}
