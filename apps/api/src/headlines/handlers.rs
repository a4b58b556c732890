use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::headlines::HeadlineBatch;
use crate::state::AppState;

/// GET /api/hackernews
pub async fn handle_headlines(
    State(state): State<AppState>,
) -> Result<Json<HeadlineBatch>, AppError> {
    Ok(Json(state.headlines.top_headlines().await?))
}
