use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::OrderStatus;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Default, Clone, Copy, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// `(page, limit, offset)` with page >= 1 and limit in 1..=100. Pages past
    /// the end of `i64` saturate to an empty page.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = (page - 1).saturating_mul(limit);
        (page, limit, offset)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    /// Only orders placed by this user.
    pub user_id: Option<Uuid>,
    /// Only orders from this restaurant.
    pub restaurant_id: Option<Uuid>,
    pub status: Option<OrderStatus>,
    /// Maximum number of orders returned, default 20, at most 100.
    pub limit: Option<i64>,
    /// Page number, default 1.
    pub page: Option<i64>,
}

impl OrderListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_applies_defaults_and_bounds() {
        assert_eq!(Pagination::default().normalize(), (1, 20, 0));

        let p = Pagination {
            page: Some(3),
            limit: Some(500),
        };
        assert_eq!(p.normalize(), (3, 100, 200));

        let p = Pagination {
            page: Some(-2),
            limit: Some(0),
        };
        assert_eq!(p.normalize(), (1, 1, 0));
    }

    #[test]
    fn huge_page_saturates_offset() {
        let p = Pagination {
            page: Some(i64::MAX),
            limit: Some(20),
        };
        assert_eq!(p.normalize(), (i64::MAX, 20, i64::MAX));
    }
}
