//! Output record structures for the six per-session CSV files.
//!
//! Field names serialize in the provider's PascalCase convention so the
//! on-disk headers match what downstream consumers expect. Cells routed
//! through the time codec are plain `Option<String>` here; by the time a
//! record exists, every time value has already been encoded by the Column
//! Router, and `None` serializes as the empty missing marker.

mod event;
mod laps;
mod results;
mod stints;
mod telemetry;
mod weather;

pub use event::EventInfo;
pub use laps::LapRecord;
pub use results::ResultRecord;
pub use stints::TyreStint;
pub use telemetry::LapTelemetrySummary;
pub use weather::WeatherRecord;
