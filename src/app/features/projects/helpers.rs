use crate::app::{db, domain::ProjectId, error::AppError};

/// Parse a path identifier. Malformed identifiers are a 400 and never reach
/// the store, so they can never read as a 404.
pub fn parse_project_id(raw: &str) -> Result<ProjectId, AppError> {
    ProjectId::from_string(raw)
        .map_err(|_| AppError::Validation("Invalid project ID".to_string()))
}

/// Fetch a project or return NotFound.
pub async fn find_project_or_404(
    pool: &sqlx::SqlitePool,
    id: &ProjectId,
) -> Result<db::projects::Project, AppError> {
    db::projects::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
}
