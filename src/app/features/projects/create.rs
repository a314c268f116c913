use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use validator::Validate;

use crate::app::{
    db,
    domain::{self, GeoPoint, Milestone, ProjectId},
    error::AppError,
    AppState,
};

/// Request body for creating a project.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 255))]
    pub project_name: String,
    #[validate(length(max = 2000))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub category: String,
    #[validate(length(min = 1, max = 255))]
    pub village_name: String,
    #[validate(length(min = 1, max = 255))]
    pub location: String,
    #[validate(nested)]
    pub start_point: GeoPoint,
    #[validate(nested)]
    pub end_point: GeoPoint,
    #[validate(length(min = 1, max = 255))]
    pub contractor_name: String,
    #[validate(length(min = 1, max = 255))]
    pub contractor_id: String,
    #[validate(range(min = 0.0))]
    pub allocated_budget: f64,
    #[validate(length(min = 1, max = 255))]
    pub approved_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 255))]
    pub status: String,
    #[serde(default = "default_milestones")]
    #[validate(nested)]
    pub milestones: Vec<Milestone>,
}

fn default_status() -> String {
    "Proposed".to_string()
}

fn default_milestones() -> Vec<Milestone> {
    vec![Milestone::initial()]
}

/// Response for a created project.
#[derive(Debug, Serialize)]
pub struct CreateProjectResponse {
    pub message: String,
    pub project_id: String,
}

/// POST /projects — Create a new project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<CreateProjectResponse>), AppError> {
    request
        .validate()
        .map_err(|_| AppError::Validation("Invalid input".to_string()))?;

    let project_id = ProjectId::new();

    // Stamp creation time at the fixed IST offset; images always start empty.
    let new_project = db::NewProject {
        id: project_id.clone(),
        project_name: request.project_name,
        description: request.description,
        category: request.category,
        village_name: request.village_name,
        location: request.location,
        start_point: request.start_point,
        end_point: request.end_point,
        contractor_name: request.contractor_name,
        contractor_id: request.contractor_id,
        allocated_budget: request.allocated_budget,
        approved_by: request.approved_by,
        start_date: domain::format_rfc3339(request.start_date),
        due_date: domain::format_rfc3339(request.due_date),
        status: request.status,
        milestones: request.milestones,
        created_at: domain::format_rfc3339(domain::now_ist()),
    };

    db::projects::insert(&state.db, &new_project).await?;

    let response = CreateProjectResponse {
        message: "Project created successfully".to_string(),
        project_id: project_id.as_str().to_string(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Project creation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects", post(create_project))
}
