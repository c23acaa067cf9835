use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi;

use crate::server::model::app::AppState;

/// Serves the sorted list of documented API paths at `/`.
pub fn routes(api: &OpenApi) -> Router<AppState> {
    let paths: Vec<String> = api.paths.paths.keys().cloned().collect();

    Router::new().route(
        "/",
        get(move || {
            let paths = paths.clone();
            async move { Json(paths) }
        }),
    )
}
