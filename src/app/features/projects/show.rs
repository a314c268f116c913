use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::app::{error::AppError, AppState};

use super::{helpers, types::ProjectResponse};

/// GET /projects/:id — Full record including milestones and images.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, AppError> {
    let project_id = helpers::parse_project_id(&id)?;
    let project = helpers::find_project_or_404(&state.db, &project_id).await?;

    Ok(Json(ProjectResponse::from(project)))
}

/// Project detail routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/:id", get(show))
}
