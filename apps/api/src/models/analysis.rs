use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One persisted gap analysis. Immutable once written.
///
/// `skill_gap_result` and `roadmap_result` are stored as opaque JSON so records
/// written by older clients (or with either part missing) still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRecord {
    pub id: String,
    #[serde(with = "millis_timestamp")]
    pub timestamp: DateTime<Utc>,
    pub target_role: String,
    pub current_skills: String,
    #[serde(default)]
    pub skill_gap_result: Option<Value>,
    #[serde(default)]
    pub roadmap_result: Option<Value>,
}

/// Fields supplied by the caller when appending to the analysis log.
/// The store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAnalysis {
    pub target_role: String,
    pub current_skills: String,
    pub skill_gap_result: Option<Value>,
    pub roadmap_result: Option<Value>,
}

impl NewAnalysis {
    pub fn into_record(self, id: String, timestamp: DateTime<Utc>) -> AnalysisRecord {
        AnalysisRecord {
            id,
            timestamp,
            target_role: self.target_role,
            current_skills: self.current_skills,
            skill_gap_result: self.skill_gap_result,
            roadmap_result: self.roadmap_result,
        }
    }
}

/// RFC 3339 with exactly three fractional digits and a `Z` suffix, the shape
/// JavaScript's `Date#toISOString` produces. Reading accepts any RFC 3339.
mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
