use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppError, models::User};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    /// Defaults to `false`.
    pub is_verified: Option<bool>,
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_phone(&self.phone_number)?;
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_verified: Option<bool>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(phone) = &self.phone_number {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        Ok(())
    }
}

fn validate_phone(phone: &str) -> Result<(), AppError> {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if digits.len() < 5 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::BadRequest("phoneNumber is invalid".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AppError> {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(AppError::BadRequest("email is invalid".into())),
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserList {
    #[schema(value_type = Vec<User>)]
    pub items: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_numbers_are_digits_with_optional_plus() {
        assert!(validate_phone("+995555123456").is_ok());
        assert!(validate_phone("555123456").is_ok());
        assert!(validate_phone("555-12").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn email_needs_local_part_and_dotted_domain() {
        assert!(validate_email("nino@example.ge").is_ok());
        assert!(validate_email("@example.ge").is_err());
        assert!(validate_email("nino@localhost").is_err());
    }
}
