//! Mentor roster endpoint.

use crate::api::{AppState, error::ApiError};
use crate::entities::mentor;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;

/// `GET /api/mentors` - the roster, name ascending.
pub async fn list_mentors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<mentor::Model>>, ApiError> {
    let mentors = crate::core::mentor::get_all_mentors(&state.db).await?;
    Ok(Json(mentors))
}
