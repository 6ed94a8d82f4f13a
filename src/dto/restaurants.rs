use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::Restaurant};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub delivery_time: Option<String>,
    pub delivery_fee: Option<f64>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl CreateRestaurantRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        validate_numbers(self.rating, self.delivery_fee)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub address: Option<String>,
    pub rating: Option<f64>,
    pub delivery_time: Option<String>,
    pub delivery_fee: Option<f64>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl UpdateRestaurantRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.as_ref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::BadRequest("name must not be empty".into()));
        }
        validate_numbers(self.rating, self.delivery_fee)
    }
}

fn validate_numbers(rating: Option<f64>, delivery_fee: Option<f64>) -> Result<(), AppError> {
    if rating.is_some_and(|r| !(0.0..=5.0).contains(&r)) {
        return Err(AppError::BadRequest("rating must be between 0 and 5".into()));
    }
    if delivery_fee.is_some_and(|fee| fee < 0.0) {
        return Err(AppError::BadRequest("deliveryFee must not be negative".into()));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RestaurantList {
    #[schema(value_type = Vec<Restaurant>)]
    pub items: Vec<Restaurant>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_outside_five_stars_is_rejected() {
        let update = UpdateRestaurantRequest {
            rating: Some(5.5),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = UpdateRestaurantRequest {
            rating: Some(4.8),
            delivery_fee: Some(0.0),
            ..Default::default()
        };
        assert!(update.validate().is_ok());
    }
}
