//! Type-safe Rust library for Formula 1 session timing data.
//!
//! Paddock extracts session data (results, laps, weather, telemetry
//! summaries, tyre stints) from a timing-data provider and normalizes every
//! heterogeneous time representation into consistent on-disk CSV formats.
//!
//! # Features
//!
//! - **Lossless time codec**: fixed-width duration encodings that round-trip
//!   to the millisecond
//! - **Column routing**: one static table decides every column's encoding on
//!   both the write and the read side
//! - **Per-cell degradation**: a corrupt value blanks its own cell, never a
//!   row, file or batch
//! - **Offline archives**: recorded session dumps replay through the same
//!   pipeline as any other source
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use paddock::{BatchPlan, Paddock};
//!
//! #[tokio::main]
//! async fn main() -> paddock::Result<()> {
//!     paddock::init_tracing();
//!
//!     let provider = Paddock::open_archive("./archive")?;
//!     let channels =
//!         Paddock::spawn_extraction(provider, BatchPlan::for_years(vec![2024]), "./raw".into());
//!     for report in channels.drain().await {
//!         println!("{} {} {}: {:?}", report.year, report.event, report.session, report.outcome);
//!     }
//!
//!     let summary = Paddock::transform("./raw", "./normalized")?;
//!     println!("{} files transformed", summary.transformed());
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod types;

// Time normalization core
pub mod clock;
pub mod codec;
pub mod routing;

// Record model and provider boundary
pub mod provider;
pub mod providers;
pub mod schema;

// Pipelines
pub mod extract;
pub mod runner;
pub mod transform;

#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Core exports
pub use clock::SessionClock;
pub use error::*;
pub use types::*;

// Routing exports
pub use routing::{ColumnRoute, ROUTES, ReadRule, RecordFile, WriteRule, route_for};

// Record and provider exports
pub use provider::{LoadedSession, SessionProvider};
pub use providers::ArchiveProvider;
pub use schema::{
    EventInfo, LapRecord, LapTelemetrySummary, ResultRecord, TyreStint, WeatherRecord,
};

// Pipeline exports
pub use extract::{FileSummary, SessionExtract, extract_session};
pub use runner::{BatchPlan, Runner, RunnerChannels, SessionOutcome, SessionReport};
pub use transform::{FileOutcome, FileReport, TransformSummary, transform_tree};

use std::path::{Path, PathBuf};

/// Install a `tracing` subscriber reading `RUST_LOG`, defaulting to `info`.
///
/// Convenience for binaries and scripts driving the pipeline; calling it
/// twice is harmless.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

/// Unified entry point for the extraction and transform pipelines.
///
/// # Examples
///
/// ```rust,no_run
/// use paddock::{BatchPlan, Paddock};
///
/// # #[tokio::main]
/// # async fn main() -> paddock::Result<()> {
/// let provider = Paddock::open_archive("./archive")?;
/// let channels =
///     Paddock::spawn_extraction(provider, BatchPlan::for_years(vec![2024]), "./raw".into());
/// let reports = channels.drain().await;
/// # Ok(())
/// # }
/// ```
pub struct Paddock;

impl Paddock {
    /// Open a recorded session archive as a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive root is not a directory.
    pub fn open_archive<P: AsRef<Path>>(root: P) -> Result<ArchiveProvider> {
        ArchiveProvider::open(root)
    }

    /// Spawn an extraction run over any session provider.
    ///
    /// Returns report and cancellation handles; the run proceeds in a
    /// background task and ends when the plan is exhausted, the receiver is
    /// dropped, or the token is cancelled.
    pub fn spawn_extraction<P: SessionProvider>(
        provider: P,
        plan: BatchPlan,
        output_root: PathBuf,
    ) -> RunnerChannels {
        Runner::spawn(provider, plan, output_root)
    }

    /// Run the transform pass over an extracted tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the input root does not exist or an output
    /// directory cannot be created; individual file problems are reported
    /// in the summary instead.
    pub fn transform<I: AsRef<Path>, O: AsRef<Path>>(
        input_root: I,
        output_root: O,
    ) -> Result<TransformSummary> {
        transform_tree(input_root.as_ref(), output_root.as_ref())
    }
}
