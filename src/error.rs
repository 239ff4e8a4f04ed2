//! Error types for the timing pipeline.
//!
//! The pipeline distinguishes four failure levels (see the extraction and
//! transform modules): value-level and column-level problems never surface
//! here at all; they degrade individual cells to the missing marker.
//! `TimingError` covers file-level and session-level failures, which are
//! logged and skipped by the batch runner, plus the one fatal category
//! (output-directory setup) that aborts a run.
//!
//! ## Classification
//!
//! ```rust
//! use paddock::TimingError;
//!
//! let error = TimingError::session_load(2024, "Monaco Grand Prix", "Q", "upstream timeout");
//! assert!(!error.is_fatal());
//! assert!(error.is_retryable());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for timing operations.
pub type Result<T, E = TimingError> = std::result::Result<T, E>;

/// Main error type for the extraction and transform pipelines.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TimingError {
    #[error("Failed to load session {year} {event} {session}: {reason}")]
    SessionLoad {
        year: i32,
        event: String,
        session: String,
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Parse error in {context}: {details}")]
    Parse { context: String, details: String },

    #[error("Archive error at {path}: {details}")]
    Archive { path: PathBuf, details: String },

    #[error("Cannot prepare output directory {path}")]
    OutputSetup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TimingError {
    /// Returns whether this error must abort the whole batch run.
    ///
    /// Only output-directory setup failures are fatal; everything else is
    /// skipped at its own level and the batch continues.
    pub fn is_fatal(&self) -> bool {
        matches!(self, TimingError::OutputSetup { .. })
    }

    /// Returns whether this error is potentially recoverable through retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            TimingError::SessionLoad { .. } => true,
            TimingError::File { .. } => false,
            TimingError::Csv { .. } => false,
            TimingError::Parse { .. } => false,
            TimingError::Archive { .. } => false,
            TimingError::OutputSetup { .. } => false,
        }
    }

    /// Helper constructor for session load failures.
    pub fn session_load(
        year: i32,
        event: impl Into<String>,
        session: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TimingError::SessionLoad {
            year,
            event: event.into(),
            session: session.into(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Helper constructor for session load failures with a source error.
    pub fn session_load_with_source(
        year: i32,
        event: impl Into<String>,
        session: impl Into<String>,
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        TimingError::SessionLoad {
            year,
            event: event.into(),
            session: session.into(),
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Helper constructor for file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        TimingError::File { path, source }
    }

    /// Helper constructor for CSV errors with path context.
    pub fn csv_error(path: PathBuf, source: csv::Error) -> Self {
        TimingError::Csv { path, source }
    }

    /// Helper constructor for parse errors.
    pub fn parse_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        TimingError::Parse { context: context.into(), details: details.into() }
    }

    /// Helper constructor for archive errors.
    pub fn archive_error(path: PathBuf, details: impl Into<String>) -> Self {
        TimingError::Archive { path, details: details.into() }
    }

    /// Helper constructor for fatal output-directory setup errors.
    pub fn output_setup(path: PathBuf, source: std::io::Error) -> Self {
        TimingError::OutputSetup { path, source }
    }
}

impl From<std::io::Error> for TimingError {
    fn from(err: std::io::Error) -> Self {
        TimingError::File { path: PathBuf::from("<unknown>"), source: err }
    }
}
