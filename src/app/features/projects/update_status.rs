use axum::{
    extract::{Path, State},
    routing::patch,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::app::{
    db,
    domain::Milestone,
    error::AppError,
    AppState,
};

use super::helpers;

/// Request body for a status update. The status is a free-form lifecycle
/// string; any non-empty value is set verbatim. There is no recognised-value
/// or transition check.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, max = 255))]
    pub status: String,
    /// Optional milestone title to append in the same update.
    #[validate(length(min = 1, max = 255))]
    pub new_milestone: Option<String>,
}

/// Response for a status update.
#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub new_status: String,
    pub milestone_added: Option<String>,
}

/// PATCH /projects/:id/status — Set the status field, optionally appending
/// a milestone.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    let project_id = helpers::parse_project_id(&id)?;

    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let milestone = request.new_milestone.as_deref().map(Milestone::pending);

    let matched = db::projects::update_status(
        &state.db,
        &project_id,
        &request.status,
        milestone.as_ref(),
    )
    .await?;

    if matched == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    let response = UpdateStatusResponse {
        message: "Project updated".to_string(),
        new_status: request.status,
        milestone_added: request.new_milestone,
    };

    Ok(Json(response))
}

/// Status update routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/:id/status", patch(update_status))
}
