//! Event and session identity record.

use serde::{Deserialize, Serialize};

/// One row describing the event and session a directory of files belongs to.
#[derive(Default, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EventInfo {
    /// Championship year.
    pub year: i32,
    /// Full event name, e.g. "Monaco Grand Prix".
    pub event_name: Option<String>,
    /// Event calendar date, ISO-8601.
    pub event_date: Option<String>,
    /// Host country.
    pub country: Option<String>,
    /// Circuit location.
    pub location: Option<String>,
    /// Session key the session was requested under, e.g. "Q" or "R".
    pub session_key: String,
    /// Resolved session name reported by the provider.
    pub session_name_actual: Option<String>,
    /// Local session start instant, timezone-aware ISO-8601.
    #[serde(rename = "SessionStartDateLocalISO")]
    pub session_start_date_local_iso: Option<String>,
    /// UTC session start instant, ISO-8601. Recorded for reference; never
    /// substituted into wall-clock projection.
    #[serde(rename = "SessionStartDateUTCISO")]
    pub session_start_date_utc_iso: Option<String>,
}
