use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::history::log::AppendOutcome;
use crate::models::analysis::{AnalysisRecord, NewAnalysis};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("analysis log {path} is not a valid JSON array: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize analysis log: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Persistence for past analyses. Implement this to swap backends without
/// touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn AnalysisStore>`.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Appends an analysis, or reports the id of a recent identical submission.
    async fn append(&self, analysis: NewAnalysis) -> Result<AppendOutcome, StoreError>;

    /// All retained records, most recent first.
    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError>;

    /// Exact id match; `Ok(None)` when no record has that id.
    async fn get(&self, id: &str) -> Result<Option<AnalysisRecord>, StoreError>;
}
