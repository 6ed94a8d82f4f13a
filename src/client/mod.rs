//! HTTP client used by the mobile app's order-history screen.

use thiserror::Error;

pub mod display;
pub mod order_history;

pub use display::{BadgeColor, OrderSummary, StatusBadge, format_amount, status_badge};
pub use order_history::{HistoryFilter, HistoryOrder, OrderHistoryClient, normalize_orders};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Not Found")]
    NotFound,

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("server error ({status})")]
    Server { status: u16 },

    #[error("network error")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

impl ClientError {
    /// Whether the screen should offer a manual retry. Missing and rejected
    /// requests would fail the same way again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Server { .. } | ClientError::Http(_) | ClientError::UnexpectedBody(_)
        )
    }

    /// Text shown to the user in the error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            ClientError::NotFound => "შეკვეთები ვერ მოიძებნა",
            ClientError::Rejected { .. } => "მოთხოვნა უარყოფილია",
            _ => "დაფიქსირდა შეცდომა. სცადეთ ხელახლა",
        }
    }
}
