use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{ClientError, display::OrderSummary};
use crate::models::LineItem;

/// An order as the history screen sees it. Lenient on purpose: missing fees
/// count as zero and the status is kept as the raw string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryOrder {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub restaurant_id: Option<String>,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl HistoryOrder {
    pub fn display_total(&self) -> f64 {
        self.total_amount + self.delivery_fee
    }

    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        self.order_date.or(self.created_at)
    }
}

/// Query for `GET /orders`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OrdersPayload {
    Bare(Vec<HistoryOrder>),
    Wrapped {
        // required key, but `null` is an empty list
        #[serde(deserialize_with = "Option::deserialize")]
        data: Option<Vec<HistoryOrder>>,
    },
}

/// Accepts either a bare array of orders or an object carrying them under
/// `data`, and returns the orders.
pub fn normalize_orders(body: Value) -> Result<Vec<HistoryOrder>, ClientError> {
    match serde_json::from_value::<OrdersPayload>(body) {
        Ok(OrdersPayload::Bare(orders)) => Ok(orders),
        Ok(OrdersPayload::Wrapped { data }) => Ok(data.unwrap_or_default()),
        Err(err) => Err(ClientError::UnexpectedBody(err.to_string())),
    }
}

#[derive(Debug, Clone)]
pub struct OrderHistoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderHistoryClient {
    /// `base_url` points at the API root, e.g. `http://localhost:3000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub async fn fetch(&self, filter: &HistoryFilter) -> Result<Vec<HistoryOrder>, ClientError> {
        let url = format!("{}/orders", self.base_url);
        tracing::debug!(%url, ?filter, "fetching order history");

        let response = self.http.get(&url).query(filter).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if status.is_client_error() {
            let message = rejection_message(response.json::<Value>().await.ok());
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(ClientError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.json::<Value>().await?;
        normalize_orders(body)
    }

    pub async fn fetch_summaries(
        &self,
        filter: &HistoryFilter,
    ) -> Result<Vec<OrderSummary>, ClientError> {
        let orders = self.fetch(filter).await?;
        Ok(orders.iter().map(OrderSummary::from).collect())
    }
}

fn rejection_message(body: Option<Value>) -> String {
    body.as_ref()
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("request rejected")
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw_order(id: &str) -> Value {
        json!({
            "id": id,
            "restaurantId": "0b7c7a0e-6d1e-4f7e-9a55-0d8f0a1f2b3c",
            "items": [{ "name": "Khachapuri", "quantity": 1, "price": 25.0 }],
            "totalAmount": 25.0,
            "deliveryFee": 3.5,
            "status": "delivered",
            "orderDate": "2026-10-18T12:30:00Z"
        })
    }

    #[test]
    fn bare_array_and_data_envelope_normalize_to_the_same_list() {
        let bare = normalize_orders(json!([raw_order("a"), raw_order("b")])).unwrap();
        let wrapped = normalize_orders(json!({
            "message": "Orders",
            "data": [raw_order("a"), raw_order("b")],
            "meta": { "page": 1, "perPage": 20, "total": 2 }
        }))
        .unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.len(), 2);
        assert_eq!(bare[0].display_total(), 28.5);
    }

    #[test]
    fn envelope_with_total_only_field_is_accepted() {
        let orders = normalize_orders(json!({ "data": [raw_order("a")], "total": 1 })).unwrap();
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn null_data_is_an_empty_history() {
        let orders = normalize_orders(json!({ "message": "Orders", "data": null })).unwrap();
        assert!(orders.is_empty());
    }

    #[test]
    fn mongo_style_ids_and_missing_fee_are_tolerated() {
        let orders = normalize_orders(json!([{
            "_id": "665f1c2e9b1d4a0012345678",
            "totalAmount": 12.0,
            "status": "pending",
            "createdAt": "2026-10-01T08:00:00Z"
        }]))
        .unwrap();
        assert_eq!(orders[0].id, "665f1c2e9b1d4a0012345678");
        assert_eq!(orders[0].delivery_fee, 0.0);
        assert!(orders[0].placed_at().is_some());
    }

    #[test]
    fn other_shapes_are_rejected() {
        let err = normalize_orders(json!({ "orders": [] })).unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedBody(_)));
        assert!(err.is_retryable());

        assert!(normalize_orders(json!("nope")).is_err());
    }

    #[test]
    fn filter_skips_unset_parameters() {
        let filter = HistoryFilter {
            status: Some("delivered".into()),
            limit: Some(10),
            ..Default::default()
        };
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(value, json!({ "status": "delivered", "limit": 10 }));
    }
}
