use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::history::log::{AnalysisLog, AppendOutcome};
use crate::history::store::{AnalysisStore, StoreError};
use crate::models::analysis::{AnalysisRecord, NewAnalysis};

/// Non-persistent store for tests and throwaway instances.
#[derive(Default)]
pub struct MemoryStore {
    log: Mutex<AnalysisLog>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn append(&self, analysis: NewAnalysis) -> Result<AppendOutcome, StoreError> {
        let mut log = self.log.lock().await;
        Ok(log.append(analysis, Utc::now()))
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, StoreError> {
        Ok(self.log.lock().await.newest_first())
    }

    async fn get(&self, id: &str) -> Result<Option<AnalysisRecord>, StoreError> {
        Ok(self.log.lock().await.get(id).cloned())
    }
}
