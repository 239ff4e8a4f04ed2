//! Archive provider reading recorded session dumps.
//!
//! Sessions live as YAML files under `{root}/{year}/{event}/{key}.yaml`.
//! This is the offline/replay path: extraction over an archive behaves
//! identically to extraction over a live source, and the integration tests
//! run against it. A live timing client is a separate concern and out of
//! scope here.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::provider::{LoadedSession, SessionProvider};
use crate::{Result, TimingError};

/// Provider backed by a directory tree of YAML session dumps.
#[derive(Debug)]
pub struct ArchiveProvider {
    root: PathBuf,
}

impl ArchiveProvider {
    /// Open an archive rooted at `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(TimingError::archive_error(root, "archive root is not a directory"));
        }
        info!(root = %root.display(), "opened session archive");
        Ok(ArchiveProvider { root })
    }

    /// The archive root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn session_path(&self, year: i32, event: &str, session_key: &str) -> PathBuf {
        self.root.join(year.to_string()).join(event).join(format!("{session_key}.yaml"))
    }
}

#[async_trait::async_trait]
impl SessionProvider for ArchiveProvider {
    async fn events(&mut self, year: i32) -> Result<Vec<String>> {
        let year_dir = self.root.join(year.to_string());
        if !year_dir.is_dir() {
            debug!(year, "no archive directory for year");
            return Ok(Vec::new());
        }

        let mut events = Vec::new();
        let entries = std::fs::read_dir(&year_dir)
            .map_err(|e| TimingError::file_error(year_dir.clone(), e))?;
        for entry in entries {
            let entry = entry.map_err(|e| TimingError::file_error(year_dir.clone(), e))?;
            if entry.path().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    events.push(name.to_string());
                }
            }
        }
        // Directory iteration order is platform-dependent.
        events.sort();
        Ok(events)
    }

    async fn load(&mut self, year: i32, event: &str, session_key: &str) -> Result<LoadedSession> {
        let path = self.session_path(year, event, session_key);
        debug!(path = %path.display(), "loading archived session");

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            TimingError::session_load_with_source(
                year,
                event,
                session_key,
                format!("cannot read archive file {}", path.display()),
                Box::new(e),
            )
        })?;

        let session: LoadedSession = serde_yaml_ng::from_str(&contents).map_err(|e| {
            TimingError::session_load_with_source(
                year,
                event,
                session_key,
                format!("malformed session dump {}", path.display()),
                Box::new(e),
            )
        })?;

        Ok(session)
    }
}
