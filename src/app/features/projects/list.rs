use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::app::{db, error::AppError, AppState};

use super::types::ProjectResponse;

/// GET /projects/by-village/:village_name — List a village's projects,
/// newest first. The village is a free-text label matched exactly.
pub async fn list_by_village(
    State(state): State<AppState>,
    Path(village_name): Path<String>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = db::projects::find_by_village(&state.db, &village_name).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// GET /projects/by-contractor/:contractor_id — List a contractor's
/// projects, newest first.
pub async fn list_by_contractor(
    State(state): State<AppState>,
    Path(contractor_id): Path<String>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let projects = db::projects::find_by_contractor(&state.db, &contractor_id).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// Listing routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects/by-village/:village_name", get(list_by_village))
        .route("/projects/by-contractor/:contractor_id", get(list_by_contractor))
}
