//! Encoding variant tags for on-disk time strings.

/// The closed set of fixed-width string encodings used in the CSV files.
///
/// Which variant applies to which column is decided by the routing table,
/// never by the value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeEncoding {
    /// `[sign]MM:SS:mmm`: short intervals such as lap, sector and qualifying
    /// segment durations.
    MmSsMs,
    /// `[sign]HH:MM:SS`: session-relative timestamps without sub-second
    /// resolution.
    HhMmSs,
    /// `[sign]HH:MM:SS:mmm`: full-precision absolute times and total
    /// session durations.
    HhMmSsMs,
    /// Timezone-aware ISO-8601 timestamp. Calendar dates and session start
    /// instants only, never durations.
    Iso8601,
}

impl TimeEncoding {
    /// Human-readable shape label, used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeEncoding::MmSsMs => "MM:SS:mmm",
            TimeEncoding::HhMmSs => "HH:MM:SS",
            TimeEncoding::HhMmSsMs => "HH:MM:SS:mmm",
            TimeEncoding::Iso8601 => "ISO-8601",
        }
    }
}

impl std::fmt::Display for TimeEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
