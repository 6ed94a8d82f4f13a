use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::Category};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub bg_color: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl CreateCategoryRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("name is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub bg_color: Option<String>,
    pub is_active: Option<bool>,
    pub order: Option<i32>,
}

impl UpdateCategoryRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.as_ref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AppError::BadRequest("name must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CategoryList {
    #[schema(value_type = Vec<Category>)]
    pub items: Vec<Category>,
}
