//! Weather sample record.

use serde::{Deserialize, Serialize};

/// One row of `weather_data.csv`. `Time` is a local wall-clock stamp.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct WeatherRecord {
    pub time: Option<String>,
    /// Air temperature, °C.
    pub air_temp: Option<f64>,
    /// Track surface temperature, °C.
    pub track_temp: Option<f64>,
    /// Relative humidity, %.
    pub humidity: Option<f64>,
    /// Air pressure, mbar.
    pub pressure: Option<f64>,
    pub rainfall: Option<bool>,
    /// Wind direction, degrees.
    pub wind_direction: Option<u32>,
    /// Wind speed, m/s.
    pub wind_speed: Option<f64>,
}
