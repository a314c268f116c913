use axum::Router;

use crate::app::AppState;

pub mod create;
pub mod helpers;
pub mod list;
pub mod show;
pub mod types;
pub mod update_status;
pub mod upload_image;

/// Project routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(create::routes())
        .merge(list::routes())
        .merge(show::routes())
        .merge(update_status::routes())
        .merge(upload_image::routes())
}
