#![allow(dead_code)]

use std::sync::Arc;

use gramtrack::app::{config::Config, storage::LocalStorage, AppState};
use gramtrack::create_router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:").await.unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

pub fn test_router(pool: SqlitePool) -> axum::Router {
    let root = std::env::temp_dir().join(format!(
        "gramtrack-test-{}",
        ulid::Ulid::new().to_string().to_lowercase()
    ));
    let state = AppState {
        db: pool,
        storage: Arc::new(LocalStorage::new(root, "http://localhost:3000".to_string())),
        config: Config::for_tests(),
    };
    create_router(state)
}

/// Valid create payload with the given village and contractor.
pub fn project_payload(village_name: &str, contractor_id: &str) -> serde_json::Value {
    serde_json::json!({
        "project_name": "Village Road Upgrade",
        "description": "Bitumen resurfacing of the main approach road",
        "category": "Roads",
        "village_name": village_name,
        "location": "Main approach road, ward 4",
        "start_point": { "lat": 18.5204, "lng": 73.8567 },
        "end_point": { "lat": 18.5310, "lng": 73.8446 },
        "contractor_name": "Shakti Infra Pvt Ltd",
        "contractor_id": contractor_id,
        "allocated_budget": 2500000.0,
        "approved_by": "District Collector",
        "start_date": "2026-01-15T09:00:00+05:30",
        "due_date": "2026-06-30T18:00:00+05:30"
    })
}

/// POST the payload to /projects and return the new project id.
pub async fn create_project(app: &axum::Router, payload: &serde_json::Value) -> String {
    let request = http::Request::builder()
        .method("POST")
        .uri("/projects")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(payload.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), http::StatusCode::CREATED);

    let body = body_json(response).await;
    body["project_id"].as_str().expect("project_id in create response").to_string()
}

/// GET a URI and return (status, parsed JSON body).
pub async fn get_json(app: &axum::Router, uri: &str) -> (http::StatusCode, serde_json::Value) {
    let request = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body_bytes).unwrap()
}

pub const MULTIPART_BOUNDARY: &str = "gramtrack-test-boundary";

/// Multipart body with a file part and, optionally, a description part.
pub fn image_upload_body(description: Option<&str>) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        b"content-disposition: form-data; name=\"file\"; filename=\"site-progress.jpg\"\r\n",
    );
    body.extend_from_slice(b"content-type: image/jpeg\r\n\r\n");
    body.extend_from_slice(b"not-really-a-jpeg");
    body.extend_from_slice(b"\r\n");
    if let Some(text) = description {
        body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(b"content-disposition: form-data; name=\"description\"\r\n\r\n");
        body.extend_from_slice(text.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}

/// Multipart body with only a description part (no file).
pub fn description_only_body(description: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(b"content-disposition: form-data; name=\"description\"\r\n\r\n");
    body.extend_from_slice(description.as_bytes());
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
    body
}
