//! Tyre stint summary record.

use serde::{Deserialize, Serialize};

/// One row of `tyre_stints_summary.csv`: a continuous run on one set of
/// tyres, derived from the lap rows. No time columns, structural counts
/// only.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TyreStint {
    pub driver: String,
    pub stint_number: u32,
    pub compound: Option<String>,
    pub start_lap: Option<u32>,
    pub end_lap: Option<u32>,
    pub num_laps_in_stint: u32,
}
