//! File-backed analysis log: a single JSON array rewritten whole on every append.
//!
//! Appends are serialized per store instance; the read-modify-write runs under
//! an async mutex. Writes go to a temp file in the target directory which is
//! then renamed over the log, so readers never observe a partial document.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::history::log::{AnalysisLog, AppendOutcome};
use crate::history::store::{AnalysisStore, StoreError};
use crate::models::analysis::{AnalysisRecord, NewAnalysis};

pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole log. A missing file is an empty log.
    async fn load(&self) -> Result<AnalysisLog, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AnalysisLog::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if text.trim().is_empty() {
            return Ok(AnalysisLog::default());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, log: &AnalysisLog) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(log)?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, data.as_bytes())).await?
    }
}

/// Writes `bytes` to a sibling temp file, syncs it, then renames it over `path`.
fn write_atomically(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |source: std::io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(&parent).map_err(|source| StoreError::Io {
        path: parent.clone(),
        source,
    })?;

    let mut tmp = NamedTempFile::new_in(&parent).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[async_trait]
impl AnalysisStore for JsonFileStore {
    async fn append(&self, analysis: NewAnalysis) -> Result<AppendOutcome, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut log = self.load().await?;
        let outcome = log.append(analysis, Utc::now());

        if outcome.is_duplicate {
            debug!("Duplicate analysis absorbed; returning existing id {}", outcome.id);
            return Ok(outcome);
        }

        self.save(&log).await?;
        info!(
            "Saved analysis {} ({} retained in {})",
            outcome.id,
            outcome.total_analyses,
            self.path.display()
        );
        Ok(outcome)
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        let log = self.load().await?;
        debug!("Read {} analyses from {}", log.len(), self.path.display());
        Ok(log.into_newest_first())
    }

    async fn get(&self, id: &str) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.load().await?.get(id).cloned())
    }
}
