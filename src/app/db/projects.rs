use sqlx::types::Json;
use sqlx::FromRow;

use crate::app::domain::{GeoPoint, ImageRecord, Milestone, ProjectId};

/// Listing scans never return more than this many rows.
pub const MAX_LISTED: i64 = 100;

/// Database row for the projects table. Points and the ordered sequences
/// live in JSON columns; everything else is a typed column.
#[derive(Debug, FromRow)]
pub struct Project {
    pub id: String,
    pub project_name: String,
    pub description: String,
    pub category: String,
    pub village_name: String,
    pub location: String,
    pub start_point: Json<GeoPoint>,
    pub end_point: Json<GeoPoint>,
    pub contractor_name: String,
    pub contractor_id: String,
    pub allocated_budget: f64,
    pub approved_by: String,
    pub start_date: String,
    pub due_date: String,
    pub status: String,
    pub milestones: Json<Vec<Milestone>>,
    pub images: Json<Vec<ImageRecord>>,
    pub created_at: String,
}

/// Data structure for inserting a new project.
pub struct NewProject {
    pub id: ProjectId,
    pub project_name: String,
    pub description: String,
    pub category: String,
    pub village_name: String,
    pub location: String,
    pub start_point: GeoPoint,
    pub end_point: GeoPoint,
    pub contractor_name: String,
    pub contractor_id: String,
    pub allocated_budget: f64,
    pub approved_by: String,
    pub start_date: String,
    pub due_date: String,
    pub status: String,
    pub milestones: Vec<Milestone>,
    pub created_at: String,
}

/// Insert a new project. The images sequence always starts empty.
pub async fn insert<'e, E>(executor: E, project: &NewProject) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query(
        "INSERT INTO projects (id, project_name, description, category, village_name, location, \
         start_point, end_point, contractor_name, contractor_id, allocated_budget, \
         approved_by, start_date, due_date, status, milestones, images, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, '[]', ?)",
    )
    .bind(project.id.as_str())
    .bind(&project.project_name)
    .bind(&project.description)
    .bind(&project.category)
    .bind(&project.village_name)
    .bind(&project.location)
    .bind(Json(&project.start_point))
    .bind(Json(&project.end_point))
    .bind(&project.contractor_name)
    .bind(&project.contractor_id)
    .bind(project.allocated_budget)
    .bind(&project.approved_by)
    .bind(&project.start_date)
    .bind(&project.due_date)
    .bind(&project.status)
    .bind(Json(&project.milestones))
    .bind(&project.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

/// Find a project by ID.
pub async fn find_by_id(
    pool: &sqlx::SqlitePool,
    id: &ProjectId,
) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, project_name, description, category, village_name, location, \
         start_point, end_point, contractor_name, contractor_id, allocated_budget, \
         approved_by, start_date, due_date, status, milestones, images, created_at \
         FROM projects WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await
}

/// Find projects for a village, newest first, capped at MAX_LISTED.
pub async fn find_by_village(
    pool: &sqlx::SqlitePool,
    village_name: &str,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, project_name, description, category, village_name, location, \
         start_point, end_point, contractor_name, contractor_id, allocated_budget, \
         approved_by, start_date, due_date, status, milestones, images, created_at \
         FROM projects WHERE village_name = ? ORDER BY created_at DESC LIMIT ?",
    )
    .bind(village_name)
    .bind(MAX_LISTED)
    .fetch_all(pool)
    .await
}

/// Find projects for a contractor, newest first, capped at MAX_LISTED.
pub async fn find_by_contractor(
    pool: &sqlx::SqlitePool,
    contractor_id: &str,
) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "SELECT id, project_name, description, category, village_name, location, \
         start_point, end_point, contractor_name, contractor_id, allocated_budget, \
         approved_by, start_date, due_date, status, milestones, images, created_at \
         FROM projects WHERE contractor_id = ? ORDER BY created_at DESC LIMIT ?",
    )
    .bind(contractor_id)
    .bind(MAX_LISTED)
    .fetch_all(pool)
    .await
}

/// Set the status field, optionally appending a milestone in the same
/// statement. Returns the number of matched rows (0 means no such project).
pub async fn update_status(
    pool: &sqlx::SqlitePool,
    id: &ProjectId,
    status: &str,
    new_milestone: Option<&Milestone>,
) -> Result<u64, sqlx::Error> {
    let result = match new_milestone {
        Some(milestone) => {
            sqlx::query(
                "UPDATE projects SET status = ?, \
                 milestones = json_insert(milestones, '$[#]', json(?)) WHERE id = ?",
            )
            .bind(status)
            .bind(Json(milestone))
            .bind(id.as_str())
            .execute(pool)
            .await?
        }
        None => {
            sqlx::query("UPDATE projects SET status = ? WHERE id = ?")
                .bind(status)
                .bind(id.as_str())
                .execute(pool)
                .await?
        }
    };

    Ok(result.rows_affected())
}

/// Append an image record to a project's images sequence. This is the only
/// mutation of the sequence. Returns the number of matched rows.
pub async fn append_image(
    pool: &sqlx::SqlitePool,
    id: &ProjectId,
    image: &ImageRecord,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE projects SET images = json_insert(images, '$[#]', json(?)) WHERE id = ?",
    )
    .bind(Json(image))
    .bind(id.as_str())
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
