use anyhow::Context;
use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{error, info};

use crate::errors::{ApiJson, AppError};
use crate::history::log::AppendOutcome;
use crate::models::analysis::NewAnalysis;
use crate::roadmap::Roadmap;
use crate::skills::handlers::SkillGapRequest;
use crate::skills::input::{require_skills, resolve_role};
use crate::skills::matcher::GapResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub skill_gap: GapResult,
    pub roadmap: Roadmap,
    /// Absent when the analysis could not be persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<AppendOutcome>,
    pub persisted: bool,
}

/// POST /api/analyze
///
/// Gap analysis + roadmap + history append in one call. Persistence is a side
/// effect: if the store fails the computed results are still returned, with
/// `persisted: false`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SkillGapRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let role = resolve_role(request.role.as_deref(), request.target_role.as_deref())?;
    let skills_input = require_skills(request.current_skills.as_ref())?;

    let skill_gap = state
        .matcher
        .compute_gap(&role, &skills_input.normalized());
    let roadmap = state.roadmaps.roadmap_for(&role);

    let analysis = NewAnalysis {
        target_role: role,
        current_skills: skills_input.raw(),
        skill_gap_result: Some(
            serde_json::to_value(&skill_gap).context("failed to serialize gap result")?,
        ),
        roadmap_result: Some(
            serde_json::to_value(&roadmap).context("failed to serialize roadmap")?,
        ),
    };

    let saved = match state.store.append(analysis).await {
        Ok(outcome) => {
            info!(
                "Analysis {} for '{}' recorded (duplicate: {})",
                outcome.id, skill_gap.role, outcome.is_duplicate
            );
            Some(outcome)
        }
        Err(e) => {
            error!("Failed to persist analysis for '{}': {e}", skill_gap.role);
            None
        }
    };

    Ok(Json(AnalyzeResponse {
        persisted: saved.is_some(),
        saved,
        skill_gap,
        roadmap,
    }))
}
