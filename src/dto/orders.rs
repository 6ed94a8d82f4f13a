use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{LineItem, Order, OrderStatus},
};

/// Largest quantity accepted on a single order line.
pub const MAX_LINE_QUANTITY: i32 = 1_000;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: Option<Uuid>,
    pub restaurant_id: Uuid,
    pub items: Vec<LineItem>,
    /// Defaults to the sum of `price * quantity` over `items`.
    pub total_amount: Option<f64>,
    /// Defaults to `0`.
    pub delivery_fee: Option<f64>,
    /// Defaults to `pending`.
    pub status: Option<OrderStatus>,
    /// Defaults to the time of creation.
    pub order_date: Option<DateTime<Utc>>,
}

impl CreateOrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_items(&self.items)?;
        validate_amounts(self.total_amount, self.delivery_fee)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub items: Option<Vec<LineItem>>,
    pub total_amount: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub status: Option<OrderStatus>,
    pub order_date: Option<DateTime<Utc>>,
}

impl UpdateOrderRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(items) = &self.items {
            validate_items(items)?;
        }
        validate_amounts(self.total_amount, self.delivery_fee)
    }

    /// True when the request touches anything besides `status`.
    pub fn changes_contents(&self) -> bool {
        self.items.is_some()
            || self.total_amount.is_some()
            || self.delivery_fee.is_some()
            || self.order_date.is_some()
    }
}

/// Sum of `price * quantity` over all lines.
pub fn items_total(items: &[LineItem]) -> f64 {
    items
        .iter()
        .map(|item| item.price * f64::from(item.quantity))
        .sum()
}

fn validate_items(items: &[LineItem]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::BadRequest("order must contain at least one item".into()));
    }
    for item in items {
        if item.name.trim().is_empty() {
            return Err(AppError::BadRequest("item name is required".into()));
        }
        if item.quantity <= 0 || item.quantity > MAX_LINE_QUANTITY {
            return Err(AppError::BadRequest(format!(
                "invalid quantity for item {}",
                item.name
            )));
        }
        if item.price < 0.0 {
            return Err(AppError::BadRequest(format!(
                "invalid price for item {}",
                item.name
            )));
        }
    }
    Ok(())
}

fn validate_amounts(total_amount: Option<f64>, delivery_fee: Option<f64>) -> Result<(), AppError> {
    if total_amount.is_some_and(|t| t < 0.0) {
        return Err(AppError::BadRequest("totalAmount must not be negative".into()));
    }
    if delivery_fee.is_some_and(|f| f < 0.0) {
        return Err(AppError::BadRequest("deliveryFee must not be negative".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct OrderList {
    #[schema(value_type = Vec<Order>)]
    pub items: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, quantity: i32, price: f64) -> LineItem {
        LineItem {
            name: name.into(),
            quantity,
            price,
        }
    }

    #[test]
    fn items_total_multiplies_quantity() {
        let items = vec![line("Khachapuri", 2, 10.0), line("Lemonade", 1, 5.0)];
        assert_eq!(items_total(&items), 25.0);
    }

    #[test]
    fn empty_or_zero_quantity_orders_are_rejected() {
        assert!(validate_items(&[]).is_err());
        assert!(validate_items(&[line("Khinkali", 0, 1.2)]).is_err());
        assert!(validate_items(&[line("Khinkali", 10, 1.2)]).is_ok());
    }

    #[test]
    fn oversized_quantities_are_rejected() {
        assert!(validate_items(&[line("Khinkali", MAX_LINE_QUANTITY, 1.2)]).is_ok());
        assert!(validate_items(&[line("Khinkali", MAX_LINE_QUANTITY + 1, 1.2)]).is_err());
        assert!(validate_items(&[line("Khinkali", i32::MAX, 1.2), line("Borjomi", 1, 2.0)]).is_err());
    }

    #[test]
    fn status_only_update_does_not_change_contents() {
        let update = UpdateOrderRequest {
            status: Some(OrderStatus::Refunded),
            ..Default::default()
        };
        assert!(!update.changes_contents());

        let update = UpdateOrderRequest {
            delivery_fee: Some(2.0),
            ..Default::default()
        };
        assert!(update.changes_contents());
    }
}
