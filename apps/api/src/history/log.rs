//! In-memory rules of the analysis log: duplicate suppression, id assignment,
//! bounded retention. Stores load an `AnalysisLog`, apply one operation and
//! write it back whole.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::analysis::{AnalysisRecord, NewAnalysis};

/// Records retained; older ones are evicted first.
pub const MAX_RECORDS: usize = 100;
/// Resubmissions of the same role and skills inside this window are dropped.
pub const DUPLICATE_WINDOW_SECS: i64 = 5;

const ID_SUFFIX_LEN: usize = 9;

/// Result of an append: the id now holding the analysis, the retained count,
/// and whether the call was absorbed as a duplicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendOutcome {
    pub id: String,
    pub total_analyses: usize,
    pub is_duplicate: bool,
}

/// Records in insertion order (oldest first), serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisLog {
    records: Vec<AnalysisRecord>,
}

impl AnalysisLog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An existing record with the same role and raw skills string, stamped
    /// within `DUPLICATE_WINDOW_SECS` of `now`.
    pub fn find_recent_duplicate(
        &self,
        target_role: &str,
        current_skills: &str,
        now: DateTime<Utc>,
    ) -> Option<&AnalysisRecord> {
        let window = Duration::seconds(DUPLICATE_WINDOW_SECS);
        self.records.iter().find(|r| {
            let age = now - r.timestamp;
            age < window
                && -age < window
                && r.target_role == target_role
                && r.current_skills == current_skills
        })
    }

    /// Appends `analysis` stamped with `now`, unless it duplicates a recent
    /// record, in which case the log is untouched and the existing id returned.
    pub fn append(&mut self, analysis: NewAnalysis, now: DateTime<Utc>) -> AppendOutcome {
        if let Some(existing) =
            self.find_recent_duplicate(&analysis.target_role, &analysis.current_skills, now)
        {
            return AppendOutcome {
                id: existing.id.clone(),
                total_analyses: self.records.len(),
                is_duplicate: true,
            };
        }

        let id = self.fresh_id(now);
        self.records.push(analysis.into_record(id.clone(), now));

        if self.records.len() > MAX_RECORDS {
            let overflow = self.records.len() - MAX_RECORDS;
            self.records.drain(..overflow);
        }

        AppendOutcome {
            id,
            total_analyses: self.records.len(),
            is_duplicate: false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&AnalysisRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn newest_first(&self) -> Vec<AnalysisRecord> {
        self.records.iter().rev().cloned().collect()
    }

    pub fn into_newest_first(mut self) -> Vec<AnalysisRecord> {
        self.records.reverse();
        self.records
    }

    /// `analysis_<unix millis>_<random suffix>`, regenerated if it collides
    /// with a record already in the log.
    fn fresh_id(&self, now: DateTime<Utc>) -> String {
        loop {
            let suffix: String = Uuid::new_v4()
                .simple()
                .to_string()
                .chars()
                .take(ID_SUFFIX_LEN)
                .collect();
            let id = format!("analysis_{}_{}", now.timestamp_millis(), suffix);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
