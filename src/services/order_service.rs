use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::{
    audit,
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest, items_total},
    entity::orders::{
        ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, LineItems,
        Model as OrderModel,
    },
    error::{AppError, AppResult},
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    services::merge_field,
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination().normalize();

    let mut condition = Condition::all();
    if let Some(user_id) = query.user_id {
        condition = condition.add(OrderCol::UserId.eq(user_id));
    }
    if let Some(restaurant_id) = query.restaurant_id {
        condition = condition.add(OrderCol::RestaurantId.eq(restaurant_id));
    }
    if let Some(status) = query.status {
        condition = condition.add(OrderCol::Status.eq(status));
    }

    let finder = Orders::find()
        .filter(condition)
        .order_by_desc(OrderCol::OrderDate)
        .order_by_desc(OrderCol::CreatedAt);

    let total = finder.clone().count(&state.orm).await? as i64;

    let orders = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items: orders },
        Some(meta),
    ))
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Order>> {
    let order = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .map(order_from_entity)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Order", order, None))
}

pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    payload.validate()?;
    let now = Utc::now();
    let total_amount = payload
        .total_amount
        .unwrap_or_else(|| items_total(&payload.items));

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(payload.user_id),
        restaurant_id: Set(payload.restaurant_id),
        items: Set(LineItems(payload.items)),
        total_amount: Set(total_amount),
        delivery_fee: Set(payload.delivery_fee.unwrap_or(0.0)),
        status: Set(payload.status.unwrap_or(OrderStatus::Pending)),
        order_date: Set(payload.order_date.unwrap_or(now).fixed_offset()),
        created_at: Set(now.fixed_offset()),
        updated_at: Set(now.fixed_offset()),
    }
    .insert(&state.orm)
    .await?;

    audit::record(
        state,
        "order_create",
        "orders",
        serde_json::json!({ "order_id": order.id, "restaurant_id": order.restaurant_id }),
    )
    .await;

    Ok(ApiResponse::success(
        "Order created",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn update_order(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    payload.validate()?;
    let existing = Orders::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    if existing.status == OrderStatus::Delivered && payload.changes_contents() {
        return Err(AppError::BadRequest(
            "Delivered orders only accept status changes".into(),
        ));
    }

    // New lines without an explicit total re-derive the total from the lines.
    let total_amount = match (&payload.items, payload.total_amount) {
        (_, Some(total)) => Some(total),
        (Some(items), None) => Some(items_total(items)),
        (None, None) => None,
    };

    let mut active: OrderActive = existing.clone().into();
    merge_field(&mut active.items, &existing.items, payload.items.map(LineItems));
    merge_field(&mut active.total_amount, &existing.total_amount, total_amount);
    merge_field(&mut active.delivery_fee, &existing.delivery_fee, payload.delivery_fee);
    merge_field(&mut active.status, &existing.status, payload.status);
    merge_field(
        &mut active.order_date,
        &existing.order_date,
        payload.order_date.map(|d| d.fixed_offset()),
    );

    if !active.is_changed() {
        return Ok(ApiResponse::success(
            "Updated",
            order_from_entity(existing),
            Some(Meta::empty()),
        ));
    }

    active.updated_at = Set(Utc::now().fixed_offset());
    let order = active.update(&state.orm).await?;

    if order.status != existing.status {
        tracing::info!(order_id = %order.id, from = ?existing.status, to = ?order.status, "order status changed");
    }

    audit::record(
        state,
        "order_update",
        "orders",
        serde_json::json!({ "order_id": order.id, "status": order.status }),
    )
    .await;

    Ok(ApiResponse::success(
        "Updated",
        order_from_entity(order),
        Some(Meta::empty()),
    ))
}

pub async fn delete_order(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Orders::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    audit::record(
        state,
        "order_delete",
        "orders",
        serde_json::json!({ "order_id": id }),
    )
    .await;

    Ok(())
}

fn order_from_entity(model: OrderModel) -> Order {
    Order {
        id: model.id,
        user_id: model.user_id,
        restaurant_id: model.restaurant_id,
        items: model.items.0,
        total_amount: model.total_amount,
        delivery_fee: model.delivery_fee,
        status: model.status,
        order_date: model.order_date.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
