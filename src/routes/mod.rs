use axum::{
    Json, Router,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

pub mod banners;
pub mod categories;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod restaurants;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/banners", banners::router())
        .nest("/categories", categories::router())
        .nest("/users", users::router())
        .nest("/restaurants", restaurants::router())
        .nest("/orders", orders::router())
}

/// Health check, `/api` and the docs UI, bound to `state`. Middleware is layered by the caller.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::success(
        "Not Found",
        serde_json::json!({ "path": uri.path() }),
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
