//! How an order is presented in the order-history list: one total and one
//! colored status badge per order.

use chrono::{DateTime, Utc};

use super::order_history::HistoryOrder;

pub const CURRENCY_SIGN: &str = "₾";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Red,
    Orange,
    Gray,
}

impl BadgeColor {
    pub fn hex(self) -> &'static str {
        match self {
            BadgeColor::Green => "#4CAF50",
            BadgeColor::Red => "#F44336",
            BadgeColor::Orange => "#FF9800",
            BadgeColor::Gray => "#9E9E9E",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    pub color: BadgeColor,
}

/// Only delivered, cancelled and refunded get a color of their own.
pub fn status_badge(status: &str) -> StatusBadge {
    let color = match status {
        "delivered" => BadgeColor::Green,
        "cancelled" => BadgeColor::Red,
        "refunded" => BadgeColor::Orange,
        _ => BadgeColor::Gray,
    };
    StatusBadge {
        label: status_label(status).to_string(),
        color,
    }
}

fn status_label(status: &str) -> &str {
    match status {
        "pending" => "მოლოდინში",
        "confirmed" => "დადასტურებულია",
        "preparing" => "მზადდება",
        "on_the_way" => "გზაშია",
        "delivered" => "მიტანილია",
        "cancelled" => "გაუქმებულია",
        "refunded" => "თანხა დაბრუნებულია",
        other => other,
    }
}

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2} {CURRENCY_SIGN}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: String,
    pub restaurant_id: Option<String>,
    pub item_count: i64,
    /// `totalAmount + deliveryFee`
    pub total: f64,
    pub total_label: String,
    pub badge: StatusBadge,
    pub placed_at: Option<DateTime<Utc>>,
}

impl From<&HistoryOrder> for OrderSummary {
    fn from(order: &HistoryOrder) -> Self {
        let total = order.display_total();
        OrderSummary {
            id: order.id.clone(),
            restaurant_id: order.restaurant_id.clone(),
            item_count: order.items.iter().map(|item| i64::from(item.quantity)).sum(),
            total,
            total_label: format_amount(total),
            badge: status_badge(&order.status),
            placed_at: order.placed_at(),
        }
    }
}
