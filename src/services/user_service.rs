use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    audit,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    services::merge_field,
    state::AppState,
};

const DUPLICATE_PHONE: &str = "Phone number is already registered";

pub async fn list_users(state: &AppState) -> AppResult<ApiResponse<UserList>> {
    let items: Vec<User> = Users::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("Users", UserList { items }, Some(meta)))
}

pub async fn get_user(state: &AppState, id: Uuid) -> AppResult<ApiResponse<User>> {
    let user = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(user_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user, None))
}

pub async fn find_by_phone(state: &AppState, phone_number: &str) -> AppResult<ApiResponse<User>> {
    let user = Users::find()
        .filter(Column::PhoneNumber.eq(phone_number))
        .one(&state.orm)
        .await?
        .map(user_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("User", user, None))
}

pub async fn create_user(
    state: &AppState,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let now = Utc::now().fixed_offset();
    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone_number: Set(payload.phone_number),
        email: Set(payload.email),
        is_verified: Set(payload.is_verified.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::on_unique_violation(DUPLICATE_PHONE))?;

    audit::record(
        state,
        "user_create",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "User created",
        user_from_entity(user),
        Some(Meta::empty()),
    ))
}

pub async fn update_user(
    state: &AppState,
    id: Uuid,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    payload.validate()?;
    let existing = Users::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.clone().into();
    merge_field(&mut active.name, &existing.name, payload.name.map(Some));
    merge_field(&mut active.first_name, &existing.first_name, payload.first_name.map(Some));
    merge_field(&mut active.last_name, &existing.last_name, payload.last_name.map(Some));
    merge_field(&mut active.phone_number, &existing.phone_number, payload.phone_number);
    merge_field(&mut active.email, &existing.email, payload.email.map(Some));
    merge_field(&mut active.is_verified, &existing.is_verified, payload.is_verified);

    if !active.is_changed() {
        return Ok(ApiResponse::success(
            "Updated",
            user_from_entity(existing),
            Some(Meta::empty()),
        ));
    }

    active.updated_at = Set(Utc::now().fixed_offset());
    let user = active
        .update(&state.orm)
        .await
        .map_err(AppError::on_unique_violation(DUPLICATE_PHONE))?;

    audit::record(
        state,
        "user_update",
        "users",
        serde_json::json!({ "user_id": user.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        user_from_entity(user),
        Some(Meta::empty()),
    ))
}

pub async fn delete_user(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Users::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state,
        "user_delete",
        "users",
        serde_json::json!({ "user_id": id }),
    )
    .await;

    Ok(())
}

fn user_from_entity(model: UserModel) -> User {
    User {
        id: model.id,
        name: model.name,
        first_name: model.first_name,
        last_name: model.last_name,
        phone_number: model.phone_number,
        email: model.email,
        is_verified: model.is_verified,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
