//! Axum route handlers for the skill-gap API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{ApiJson, AppError};
use crate::skills::input::{require_skills, resolve_role, SkillsInput};
use crate::skills::matcher::GapResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRequest {
    pub role: Option<String>,
    pub target_role: Option<String>,
    pub current_skills: Option<SkillsInput>,
}

/// POST /api/skill-gap
///
/// An unrecognized role is answered with a fallback result, not an error.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SkillGapRequest>,
) -> Result<Json<GapResult>, AppError> {
    let role = resolve_role(request.role.as_deref(), request.target_role.as_deref())?;
    let skills = require_skills(request.current_skills.as_ref())?.normalized();

    let gap = state.matcher.compute_gap(&role, &skills);
    debug!(
        "Skill gap for '{}': {}% ({} missing)",
        gap.role,
        gap.match_percentage,
        gap.missing_skills.len()
    );

    Ok(Json(gap))
}
