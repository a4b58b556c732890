use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::{ApiJson, AppError};
use crate::roadmap::Roadmap;
use crate::skills::input::resolve_role;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapRequest {
    pub role: Option<String>,
    pub target_role: Option<String>,
}

/// POST /api/roadmap
pub async fn handle_roadmap(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RoadmapRequest>,
) -> Result<Json<Roadmap>, AppError> {
    let role = resolve_role(request.role.as_deref(), request.target_role.as_deref())?;
    let roadmap = state.roadmaps.roadmap_for(&role);
    if roadmap.is_generic() {
        debug!("No canned roadmap for '{role}'; returning the generic plan");
    }
    Ok(Json(roadmap))
}
