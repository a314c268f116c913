use serde::Serialize;

use crate::app::db;
use crate::app::domain::{GeoPoint, ImageRecord, Milestone};

/// External representation of a project document, used by the listing and
/// detail endpoints.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: String,
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
    pub images: Vec<ImageRecord>,
    pub created_at: String,
}

impl From<db::projects::Project> for ProjectResponse {
    fn from(project: db::projects::Project) -> Self {
        Self {
            id: project.id,
            project_name: project.project_name,
            description: project.description,
            category: project.category,
            village_name: project.village_name,
            location: project.location,
            start_point: project.start_point.0,
            end_point: project.end_point.0,
            contractor_name: project.contractor_name,
            contractor_id: project.contractor_id,
            allocated_budget: project.allocated_budget,
            approved_by: project.approved_by,
            start_date: project.start_date,
            due_date: project.due_date,
            status: project.status,
            milestones: project.milestones.0,
            images: project.images.0,
            created_at: project.created_at,
        }
    }
}
