use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::banners::{BannerList, CreateBannerRequest, UpdateBannerRequest},
    error::AppResult,
    models::Banner,
    response::ApiResponse,
    services::banner_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_banners).post(create_banner))
        .route("/active", get(list_active_banners))
        .route(
            "/{id}",
            get(get_banner).patch(update_banner).delete(delete_banner),
        )
}

#[utoipa::path(
    get,
    path = "/api/banners",
    responses(
        (status = 200, description = "All banners by display order", body = ApiResponse<BannerList>)
    ),
    tag = "Banners"
)]
pub async fn list_banners(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BannerList>>> {
    let resp = banner_service::list_banners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/banners/active",
    responses(
        (status = 200, description = "Banners that are switched on and inside their window", body = ApiResponse<BannerList>)
    ),
    tag = "Banners"
)]
pub async fn list_active_banners(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<BannerList>>> {
    let resp = banner_service::list_active_banners(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    params(
        ("id" = Uuid, Path, description = "Banner ID")
    ),
    responses(
        (status = 200, description = "Get banner", body = ApiResponse<Banner>),
        (status = 404, description = "Banner not found"),
    ),
    tag = "Banners"
)]
pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = banner_service::get_banner(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/banners",
    request_body = CreateBannerRequest,
    responses(
        (status = 201, description = "Create banner", body = ApiResponse<Banner>),
        (status = 400, description = "Invalid banner"),
    ),
    tag = "Banners"
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(payload): Json<CreateBannerRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Banner>>)> {
    let resp = banner_service::create_banner(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    patch,
    path = "/api/banners/{id}",
    params(
        ("id" = Uuid, Path, description = "Banner ID")
    ),
    request_body = UpdateBannerRequest,
    responses(
        (status = 200, description = "Updated banner", body = ApiResponse<Banner>),
        (status = 400, description = "Invalid banner"),
        (status = 404, description = "Banner not found"),
    ),
    tag = "Banners"
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBannerRequest>,
) -> AppResult<Json<ApiResponse<Banner>>> {
    let resp = banner_service::update_banner(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    params(
        ("id" = Uuid, Path, description = "Banner ID")
    ),
    responses(
        (status = 204, description = "Deleted banner"),
        (status = 404, description = "Banner not found"),
    ),
    tag = "Banners"
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    banner_service::delete_banner(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
