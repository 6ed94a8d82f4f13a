use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::Banner};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBannerRequest {
    pub title: String,
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub image: String,
    pub description: Option<String>,
    pub link: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
    /// Defaults to `0`.
    pub order: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl CreateBannerRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.image.trim().is_empty() {
            return Err(AppError::BadRequest("image is required".into()));
        }
        validate_prices(self.old_price, self.new_price)?;
        validate_window(self.start_date, self.end_date)
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub old_price: Option<f64>,
    pub new_price: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl UpdateBannerRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.image.as_ref().is_some_and(|image| image.trim().is_empty()) {
            return Err(AppError::BadRequest("image must not be empty".into()));
        }
        validate_prices(self.old_price, self.new_price)
    }
}

fn validate_prices(old_price: Option<f64>, new_price: Option<f64>) -> Result<(), AppError> {
    if old_price.is_some_and(|p| p < 0.0) || new_price.is_some_and(|p| p < 0.0) {
        return Err(AppError::BadRequest("prices must not be negative".into()));
    }
    Ok(())
}

/// A window whose start is after its end could never be active.
pub fn validate_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
) -> Result<(), AppError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) if start > end => Err(AppError::BadRequest(
            "startDate must not be after endDate".into(),
        )),
        _ => Ok(()),
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BannerList {
    #[schema(value_type = Vec<Banner>)]
    pub items: Vec<Banner>,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn request() -> CreateBannerRequest {
        CreateBannerRequest {
            title: "Free delivery".into(),
            old_price: Some(12.0),
            new_price: Some(9.5),
            image: "https://cdn.example.com/banner.png".into(),
            description: None,
            link: None,
            is_active: None,
            order: None,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn blank_image_is_rejected() {
        let mut req = request();
        req.image = "  ".into();
        assert!(matches!(req.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn inverted_window_is_rejected_but_equal_bounds_pass() {
        let now = Utc::now();
        let mut req = request();
        req.start_date = Some(now);
        req.end_date = Some(now - Duration::days(1));
        assert!(req.validate().is_err());

        req.end_date = Some(now);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn negative_price_is_rejected() {
        let update = UpdateBannerRequest {
            new_price: Some(-1.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
