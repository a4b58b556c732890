//! Axum route handlers for the saved-analysis API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::{ApiJson, AppError};
use crate::models::analysis::{AnalysisRecord, NewAnalysis};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnalysisRequest {
    pub target_role: Option<String>,
    pub current_skills: Option<String>,
    pub skill_gap_result: Option<Value>,
    pub roadmap_result: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnalysisResponse {
    pub success: bool,
    pub message: String,
    pub id: String,
    pub total_analyses: usize,
    pub is_duplicate: bool,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisIdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisListResponse {
    pub analyses: Vec<AnalysisRecord>,
    pub count: usize,
}

/// Either the full history or, with `?id=`, one record.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisLookup {
    List(AnalysisListResponse),
    Single(AnalysisRecord),
}

/// POST /api/save-analysis
///
/// A resubmission of the same role and skills within a few seconds returns the
/// earlier record's id with `isDuplicate: true` instead of storing twice.
pub async fn handle_save_analysis(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SaveAnalysisRequest>,
) -> Result<Json<SaveAnalysisResponse>, AppError> {
    let (Some(target_role), Some(current_skills)) = (
        request.target_role.filter(|r| !r.trim().is_empty()),
        request.current_skills.filter(|s| !s.trim().is_empty()),
    ) else {
        return Err(AppError::Validation(
            "Target role and current skills are required".to_string(),
        ));
    };

    let outcome = state
        .store
        .append(NewAnalysis {
            target_role,
            current_skills,
            skill_gap_result: request.skill_gap_result,
            roadmap_result: request.roadmap_result,
        })
        .await?;

    let message = if outcome.is_duplicate {
        "Analysis already saved (duplicate prevented)"
    } else {
        "Analysis saved successfully"
    };

    Ok(Json(SaveAnalysisResponse {
        success: true,
        message: message.to_string(),
        id: outcome.id,
        total_analyses: outcome.total_analyses,
        is_duplicate: outcome.is_duplicate,
    }))
}

/// GET /api/save-analysis[?id=...]
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    Query(params): Query<AnalysisIdQuery>,
) -> Result<Json<AnalysisLookup>, AppError> {
    if let Some(id) = params.id.filter(|id| !id.is_empty()) {
        let record = find_analysis(&state, &id).await?;
        return Ok(Json(AnalysisLookup::Single(record)));
    }

    let analyses = state.store.list().await?;
    info!("Listing {} saved analyses", analyses.len());
    Ok(Json(AnalysisLookup::List(AnalysisListResponse {
        count: analyses.len(),
        analyses,
    })))
}

/// GET /api/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AnalysisRecord>, AppError> {
    Ok(Json(find_analysis(&state, &id).await?))
}

async fn find_analysis(state: &AppState, id: &str) -> Result<AnalysisRecord, AppError> {
    state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}
