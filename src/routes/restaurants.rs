use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::restaurants::{CreateRestaurantRequest, RestaurantList, UpdateRestaurantRequest},
    error::AppResult,
    models::Restaurant,
    response::ApiResponse,
    services::restaurant_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_restaurants).post(create_restaurant))
        .route("/active", get(list_active_restaurants))
        .route(
            "/{id}",
            get(get_restaurant)
                .patch(update_restaurant)
                .delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/api/restaurants",
    responses(
        (status = 200, description = "All restaurants by display order", body = ApiResponse<RestaurantList>)
    ),
    tag = "Restaurants"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    let resp = restaurant_service::list_restaurants(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/active",
    responses(
        (status = 200, description = "Restaurants currently taking orders", body = ApiResponse<RestaurantList>)
    ),
    tag = "Restaurants"
)]
pub async fn list_active_restaurants(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    let resp = restaurant_service::list_active_restaurants(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/restaurants/{id}",
    params(
        ("id" = Uuid, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 200, description = "Get restaurant", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    let resp = restaurant_service::get_restaurant(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/restaurants",
    request_body = CreateRestaurantRequest,
    responses(
        (status = 201, description = "Create restaurant", body = ApiResponse<Restaurant>),
        (status = 400, description = "Invalid restaurant"),
    ),
    tag = "Restaurants"
)]
pub async fn create_restaurant(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Restaurant>>)> {
    let resp = restaurant_service::create_restaurant(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    patch,
    path = "/api/restaurants/{id}",
    params(
        ("id" = Uuid, Path, description = "Restaurant ID")
    ),
    request_body = UpdateRestaurantRequest,
    responses(
        (status = 200, description = "Updated restaurant", body = ApiResponse<Restaurant>),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn update_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateRestaurantRequest>,
) -> AppResult<Json<ApiResponse<Restaurant>>> {
    let resp = restaurant_service::update_restaurant(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/restaurants/{id}",
    params(
        ("id" = Uuid, Path, description = "Restaurant ID")
    ),
    responses(
        (status = 204, description = "Deleted restaurant"),
        (status = 404, description = "Restaurant not found"),
    ),
    tag = "Restaurants"
)]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    restaurant_service::delete_restaurant(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
