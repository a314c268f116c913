use axum::{
    extract::{Multipart, Path, Query, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::app::{
    db,
    domain::{self, ImageRecord},
    error::AppError,
    storage::ObjectStorage as _,
    AppState,
};

use super::helpers;

/// Description stored when the uploader supplies none.
const DEFAULT_DESCRIPTION: &str = "Progress Update";

/// Query parameters for the upload endpoint.
#[derive(Debug, Deserialize)]
pub struct UploadImageParams {
    /// ID of the contractor uploading. Must equal the project's stored
    /// contractor id.
    pub contractor_id: String,
}

/// Response for an uploaded image.
#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    pub message: String,
    pub url: String,
}

/// POST /projects/:id/upload-image — Contractor uploads a progress image.
///
/// Order matters: identifier parse (400), project fetch (404), contractor
/// check (403), then the object-store round trip and the append.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UploadImageParams>,
    mut multipart: Multipart,
) -> Result<Json<UploadImageResponse>, AppError> {
    let project_id = helpers::parse_project_id(&id)?;
    let project = helpers::find_project_or_404(&state.db, &project_id).await?;

    if project.contractor_id != params.contractor_id {
        return Err(AppError::Forbidden(
            "You are not the assigned contractor".to_string(),
        ));
    }

    let mut description = DEFAULT_DESCRIPTION.to_string();
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Validation(err.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::Validation(err.to_string()))?;
                file = Some((filename, content_type, bytes.to_vec()));
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|err| AppError::Validation(err.to_string()))?;
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing file part".to_string()))?;

    // Namespace keys per project and prefix a fresh ULID so repeated uploads
    // of the same filename never collide.
    let basename = filename.rsplit('/').next().unwrap_or(&filename);
    let key = format!(
        "projects/{}/{}-{}",
        project_id.as_str(),
        Ulid::new().to_string().to_lowercase(),
        basename
    );

    let url = state.storage.put(&key, &content_type, bytes).await?;

    let image = ImageRecord {
        url: url.clone(),
        description,
        uploaded_by: params.contractor_id,
        uploaded_at: domain::now_ist(),
    };

    let matched = db::projects::append_image(&state.db, &project_id, &image).await?;
    if matched == 0 {
        // Row vanished between the fetch and the append.
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    let response = UploadImageResponse {
        message: "Image uploaded successfully".to_string(),
        url,
    };

    Ok(Json(response))
}

/// Image upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/projects/:id/upload-image", post(upload_image))
}
