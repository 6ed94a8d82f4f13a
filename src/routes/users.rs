use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    error::AppResult,
    models::User,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/phone/{phone}", get(get_user_by_phone))
        .route(
            "/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users", body = ApiResponse<UserList>)
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<ApiResponse<UserList>>> {
    let resp = user_service::list_users(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/phone/{phone}",
    params(
        ("phone" = String, Path, description = "Phone number, digits with optional leading +")
    ),
    responses(
        (status = 200, description = "User registered with this phone number", body = ApiResponse<User>),
        (status = 404, description = "No such user"),
    ),
    tag = "Users"
)]
pub async fn get_user_by_phone(
    State(state): State<AppState>,
    Path(phone): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::find_by_phone(&state, &phone).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::get_user(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Create user", body = ApiResponse<User>),
        (status = 400, description = "Invalid user"),
        (status = 409, description = "Phone number already registered"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<User>>)> {
    let resp = user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
        (status = 409, description = "Phone number already registered"),
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::update_user(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "Deleted user"),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    user_service::delete_user(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
