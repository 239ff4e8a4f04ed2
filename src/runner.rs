//! Batch runner: walks years, events and sessions, extracting each one.
//!
//! The runner owns the provider inside a spawned task and reports one
//! `SessionReport` per attempted session over a bounded channel. Nothing
//! short of a fatal output-setup failure stops the walk: a session that
//! fails to load or extract is reported as skipped and the batch moves on.
//! Session loads are paced by an interval so an upstream service is never
//! hammered, and a cancellation token allows graceful shutdown between
//! sessions.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::extract::{self, FileSummary};
use crate::provider::SessionProvider;

/// What to extract in one run.
#[derive(Debug, Clone)]
pub struct BatchPlan {
    /// Championship years to walk.
    pub years: Vec<i32>,
    /// Events per year; `None` asks the provider for the year's events.
    pub events: Option<Vec<String>>,
    /// Session keys to extract per event.
    pub sessions: Vec<String>,
    /// Minimum spacing between session loads.
    pub pacing: Duration,
}

impl BatchPlan {
    /// Plan for a set of years with the default qualifying + race sessions.
    pub fn for_years(years: Vec<i32>) -> Self {
        BatchPlan { years, events: None, sessions: vec!["Q".into(), "R".into()], pacing: Duration::from_secs(5) }
    }
}

/// Report for one attempted session.
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub year: i32,
    pub event: String,
    pub session: String,
    pub outcome: SessionOutcome,
}

/// How one session attempt ended.
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// Files written; per-file row counts included.
    Extracted { dir: PathBuf, files: Vec<FileSummary> },
    /// Session skipped; the batch continued.
    Skipped { reason: String },
    /// Fatal failure; this is the run's final report.
    Fatal { error: String },
}

/// Handles returned by [`Runner::spawn`].
pub struct RunnerChannels {
    /// Stream of per-session reports. Ends when the run is complete.
    pub reports: ReceiverStream<SessionReport>,
    /// Cancellation token for graceful shutdown.
    pub cancel: CancellationToken,
}

impl RunnerChannels {
    /// Drain the stream, collecting every report until the run ends.
    pub async fn drain(self) -> Vec<SessionReport> {
        use futures::StreamExt;
        self.reports.collect().await
    }
}

/// Runner spawns and manages the extraction task.
pub struct Runner;

impl Runner {
    /// Spawn the extraction task for the given provider and plan.
    pub fn spawn<P>(provider: P, plan: BatchPlan, output_root: PathBuf) -> RunnerChannels
    where
        P: SessionProvider,
    {
        let (report_tx, report_rx) = mpsc::channel(32);
        let cancel = CancellationToken::new();
        let cancel_task = cancel.clone();

        tokio::spawn(async move {
            Self::run_task(provider, plan, output_root, report_tx, cancel_task).await;
        });

        RunnerChannels { reports: ReceiverStream::new(report_rx), cancel }
    }

    async fn run_task<P>(
        mut provider: P,
        plan: BatchPlan,
        output_root: PathBuf,
        report_tx: mpsc::Sender<SessionReport>,
        cancel: CancellationToken,
    ) where
        P: SessionProvider,
    {
        info!(years = ?plan.years, sessions = ?plan.sessions, "extraction run started");

        let mut interval = tokio::time::interval(plan.pacing);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        let mut extracted = 0_usize;
        let mut skipped = 0_usize;

        'years: for &year in &plan.years {
            let events = match &plan.events {
                Some(events) => events.clone(),
                None => match provider.events(year).await {
                    Ok(events) => events,
                    Err(err) => {
                        error!(year, %err, "cannot list events; year skipped");
                        continue;
                    }
                },
            };
            if events.is_empty() {
                warn!(year, "no events to process");
                continue;
            }

            for event in &events {
                for session_key in &plan.sessions {
                    if cancel.is_cancelled() {
                        info!("extraction run cancelled");
                        break 'years;
                    }

                    // Pace the upstream; cancellation interrupts the wait.
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            info!("extraction run cancelled during pacing");
                            break 'years;
                        }
                        _ = interval.tick() => {}
                    }

                    debug!(year, event = %event, session = %session_key, "loading session");
                    let outcome = match provider.load(year, event, session_key).await {
                        Ok(session) => match extract::extract_session(&session, &output_root) {
                            Ok(result) => {
                                extracted += 1;
                                SessionOutcome::Extracted { dir: result.dir, files: result.files }
                            }
                            Err(err) if err.is_fatal() => {
                                error!(%err, "fatal extraction failure; run aborted");
                                let _ = report_tx
                                    .send(SessionReport {
                                        year,
                                        event: event.clone(),
                                        session: session_key.clone(),
                                        outcome: SessionOutcome::Fatal { error: err.to_string() },
                                    })
                                    .await;
                                break 'years;
                            }
                            Err(err) => {
                                warn!(year, event = %event, session = %session_key, %err, "extraction failed; session skipped");
                                skipped += 1;
                                SessionOutcome::Skipped { reason: err.to_string() }
                            }
                        },
                        Err(err) => {
                            error!(year, event = %event, session = %session_key, %err, "session load failed; session skipped");
                            skipped += 1;
                            SessionOutcome::Skipped { reason: err.to_string() }
                        }
                    };

                    let report = SessionReport {
                        year,
                        event: event.clone(),
                        session: session_key.clone(),
                        outcome,
                    };
                    if report_tx.send(report).await.is_err() {
                        debug!("report receiver dropped, shutting down");
                        break 'years;
                    }
                }
            }
        }

        info!(extracted, skipped, "extraction run ended");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use futures::StreamExt;

    #[tokio::test]
    async fn extracts_every_planned_session_and_reports() {
        let _ = tracing_subscriber::fmt::try_init();

        let archive = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let session = test_utils::sample_session();
        test_utils::write_archive_session(archive.path(), &session).unwrap();

        let provider = crate::providers::ArchiveProvider::open(archive.path()).unwrap();
        let plan = BatchPlan {
            years: vec![2024],
            events: None,
            sessions: vec!["Q".into()],
            pacing: Duration::from_millis(1),
        };

        let reports = Runner::spawn(provider, plan, output.path().to_path_buf()).drain().await;

        assert_eq!(reports.len(), 1);
        match &reports[0].outcome {
            SessionOutcome::Extracted { files, .. } => assert_eq!(files.len(), 6),
            other => panic!("expected extraction, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_sessions_are_skipped_not_fatal() {
        let archive = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let session = test_utils::sample_session();
        test_utils::write_archive_session(archive.path(), &session).unwrap();

        let provider = crate::providers::ArchiveProvider::open(archive.path()).unwrap();
        let plan = BatchPlan {
            years: vec![2024],
            events: None,
            // "R" was never archived; "Q" exists.
            sessions: vec!["R".into(), "Q".into()],
            pacing: Duration::from_millis(1),
        };

        let reports = Runner::spawn(provider, plan, output.path().to_path_buf()).drain().await;

        assert_eq!(reports.len(), 2);
        assert!(matches!(reports[0].outcome, SessionOutcome::Skipped { .. }));
        assert!(matches!(reports[1].outcome, SessionOutcome::Extracted { .. }));
    }

    #[tokio::test]
    async fn cancellation_before_start_yields_no_reports() {
        let archive = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let session = test_utils::sample_session();
        test_utils::write_archive_session(archive.path(), &session).unwrap();

        let provider = crate::providers::ArchiveProvider::open(archive.path()).unwrap();
        let plan = BatchPlan {
            years: vec![2024],
            events: None,
            sessions: vec!["Q".into()],
            // Long enough that the first report cannot race the cancel.
            pacing: Duration::from_secs(3600),
        };

        let mut channels = Runner::spawn(provider, plan, output.path().to_path_buf());
        channels.cancel.cancel();

        // tick() fires immediately on the first call, so at most the first
        // session may complete before the cancel is observed; afterwards
        // the stream must end.
        let mut count = 0;
        while let Some(_report) = channels.reports.next().await {
            count += 1;
        }
        assert!(count <= 1);
    }
}
