//! # Checkout Error Types
//!
//! Typed error handling for the checkout engine.
//! All checkout operations return `Result<T, CheckoutError>`.

use crate::validate::ValidationErrors;
use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Configuration errors (missing endpoint, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Submission attempted with no line items
    #[error("Order has no line items")]
    EmptyOrder,

    /// A line item with a non-positive quantity reached submission
    #[error("Invalid line item: {product_id}")]
    InvalidLineItem { product_id: String },

    /// Buyer info failed field validation; the per-field map is attached
    #[error("Buyer information is invalid ({} field(s))", .errors.len())]
    ValidationFailed { errors: ValidationErrors },

    /// A submission is already in flight for this session
    #[error("Submission already in progress")]
    SubmissionInFlight,

    /// Business-level rejection from the order backend
    #[error("Order rejected: {message}")]
    Backend { message: String },

    /// Network/HTTP error communicating with the backend
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CheckoutError {
    /// Returns true if the user may retry the submission as-is
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutError::Network(_) | CheckoutError::Backend { .. }
        )
    }

    /// The single top-level message shown above the checkout form
    pub fn user_message(&self) -> String {
        match self {
            CheckoutError::Backend { message } => message.clone(),
            CheckoutError::Network(cause) => format!("Có lỗi xảy ra: {cause}"),
            other => other.to_string(),
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
