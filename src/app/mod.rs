use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;

/// Shared state available to all handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub storage: Arc<dyn storage::ObjectStorage>,
    pub config: config::Config,
}

/// App routes. Merged into the full router in lib.rs.
pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new().merge(features::projects::routes())
}

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod features;
pub mod storage;
