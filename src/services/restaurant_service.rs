use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set};
use uuid::Uuid;

use crate::{
    audit,
    dto::restaurants::{CreateRestaurantRequest, RestaurantList, UpdateRestaurantRequest},
    entity::restaurants::{ActiveModel, Column, Entity as Restaurants, Model as RestaurantModel},
    error::{AppError, AppResult},
    models::Restaurant,
    response::{ApiResponse, Meta},
    services::merge_field,
    state::AppState,
};

fn ordered(finder: Select<Restaurants>) -> Select<Restaurants> {
    finder
        .order_by_asc(Column::SortOrder)
        .order_by_desc(Column::CreatedAt)
}

pub async fn list_restaurants(state: &AppState) -> AppResult<ApiResponse<RestaurantList>> {
    let items: Vec<Restaurant> = ordered(Restaurants::find())
        .all(&state.orm)
        .await?
        .into_iter()
        .map(restaurant_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success(
        "Restaurants",
        RestaurantList { items },
        Some(meta),
    ))
}

pub async fn list_active_restaurants(
    state: &AppState,
) -> AppResult<ApiResponse<RestaurantList>> {
    let items: Vec<Restaurant> = ordered(Restaurants::find().filter(Column::IsActive.eq(true)))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(restaurant_from_entity)
        .collect();

    let meta = Meta::total(items.len() as i64);
    Ok(ApiResponse::success(
        "Active restaurants",
        RestaurantList { items },
        Some(meta),
    ))
}

pub async fn get_restaurant(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Restaurant>> {
    let restaurant = Restaurants::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(restaurant_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Restaurant", restaurant, None))
}

pub async fn create_restaurant(
    state: &AppState,
    payload: CreateRestaurantRequest,
) -> AppResult<ApiResponse<Restaurant>> {
    payload.validate()?;
    let now = Utc::now().fixed_offset();
    let restaurant = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        image: Set(payload.image),
        address: Set(payload.address),
        rating: Set(payload.rating.unwrap_or(0.0)),
        delivery_time: Set(payload.delivery_time),
        delivery_fee: Set(payload.delivery_fee.unwrap_or(0.0)),
        is_active: Set(payload.is_active.unwrap_or(true)),
        sort_order: Set(payload.order.unwrap_or(0)),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        state,
        "restaurant_create",
        "restaurants",
        serde_json::json!({ "restaurant_id": restaurant.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Restaurant created",
        restaurant_from_entity(restaurant),
        Some(Meta::empty()),
    ))
}

pub async fn update_restaurant(
    state: &AppState,
    id: Uuid,
    payload: UpdateRestaurantRequest,
) -> AppResult<ApiResponse<Restaurant>> {
    payload.validate()?;
    let existing = Restaurants::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.clone().into();
    merge_field(&mut active.name, &existing.name, payload.name);
    merge_field(&mut active.description, &existing.description, payload.description.map(Some));
    merge_field(&mut active.image, &existing.image, payload.image.map(Some));
    merge_field(&mut active.address, &existing.address, payload.address.map(Some));
    merge_field(&mut active.rating, &existing.rating, payload.rating);
    merge_field(
        &mut active.delivery_time,
        &existing.delivery_time,
        payload.delivery_time.map(Some),
    );
    merge_field(&mut active.delivery_fee, &existing.delivery_fee, payload.delivery_fee);
    merge_field(&mut active.is_active, &existing.is_active, payload.is_active);
    merge_field(&mut active.sort_order, &existing.sort_order, payload.order);

    if !active.is_changed() {
        return Ok(ApiResponse::success(
            "Updated",
            restaurant_from_entity(existing),
            Some(Meta::empty()),
        ));
    }

    active.updated_at = Set(Utc::now().fixed_offset());
    let restaurant = active.update(&state.orm).await?;

    audit::record(
        state,
        "restaurant_update",
        "restaurants",
        serde_json::json!({ "restaurant_id": restaurant.id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        restaurant_from_entity(restaurant),
        Some(Meta::empty()),
    ))
}

pub async fn delete_restaurant(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Restaurants::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state,
        "restaurant_delete",
        "restaurants",
        serde_json::json!({ "restaurant_id": id }),
    )
    .await;

    Ok(())
}

fn restaurant_from_entity(model: RestaurantModel) -> Restaurant {
    Restaurant {
        id: model.id,
        name: model.name,
        description: model.description,
        image: model.image,
        address: model.address,
        rating: model.rating,
        delivery_time: model.delivery_time,
        delivery_fee: model.delivery_fee,
        is_active: model.is_active,
        order: model.sort_order,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
