use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set};
use uuid::Uuid;

use crate::{
    audit,
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
    services::merge_field,
    state::AppState,
};

const DUPLICATE_NAME: &str = "Category name already exists";

fn ordered(finder: Select<Categories>) -> Select<Categories> {
    finder
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = ordered(Categories::find())
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success("Categories", CategoryList { items }, Some(meta)))
}

pub async fn list_active_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = ordered(Categories::find().filter(Column::IsActive.eq(true)))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(category_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success(
        "Active categories",
        CategoryList { items },
        Some(meta),
    ))
}

pub async fn get_category(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Category>> {
    let category = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(category_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Category", category, None))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    payload.validate()?;
    let now = Utc::now().fixed_offset();
    let category = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        icon: Set(payload.icon),
        bg_color: Set(payload.bg_color),
        is_active: Set(payload.is_active.unwrap_or(true)),
        sort_order: Set(payload.order.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await
    .map_err(AppError::on_unique_violation(DUPLICATE_NAME))?;

    audit::record(
        state,
        "category_create",
        "categories",
        serde_json::json!({ "category_id": category.id, "name": category.name }),
    )
    .await;

    Ok(ApiResponse::success(
        "Category created",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

pub async fn update_category(
    state: &AppState,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    payload.validate()?;
    let existing = Categories::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.clone().into();
    merge_field(
        &mut active.name,
        &existing.name,
        payload.name.map(|name| name.trim().to_string()),
    );
    merge_field(&mut active.description, &existing.description, payload.description.map(Some));
    merge_field(&mut active.icon, &existing.icon, payload.icon.map(Some));
    merge_field(&mut active.bg_color, &existing.bg_color, payload.bg_color.map(Some));
    merge_field(&mut active.is_active, &existing.is_active, payload.is_active);
    merge_field(&mut active.sort_order, &existing.sort_order, payload.order);

    if !active.is_changed() {
        return Ok(ApiResponse::success(
            "Updated",
            category_from_entity(existing),
            Some(Meta::empty()),
        ));
    }

    active.updated_at = Set(Utc::now().fixed_offset());
    let category = active
        .update(&state.orm)
        .await
        .map_err(AppError::on_unique_violation(DUPLICATE_NAME))?;

    audit::record(
        state,
        "category_update",
        "categories",
        serde_json::json!({ "category_id": category.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        category_from_entity(category),
        Some(Meta::empty()),
    ))
}

pub async fn delete_category(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Categories::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state,
        "category_delete",
        "categories",
        serde_json::json!({ "category_id": id }),
    )
    .await;

    Ok(())
}

fn category_from_entity(model: CategoryModel) -> Category {
    Category {
        id: model.id,
        name: model.name,
        description: model.description,
        icon: model.icon,
        bg_color: model.bg_color,
        is_active: model.is_active,
        order: model.sort_order,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
