//! # Order Gateway Seam
//!
//! The trait boundary between the checkout session and whatever carries
//! the order to the backend. The HTTP implementation lives in
//! `checkout-gateway`; tests substitute their own.

use crate::error::CheckoutResult;
use crate::order::{CheckoutOutcome, OrderRequest, PaymentMethod};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application-level status value the backend uses for accepted orders
pub const STATUS_SUCCESS: &str = "success";

/// Generic fallback when the backend rejects without a message
pub const GENERIC_FAILURE_MESSAGE: &str = "Có lỗi xảy ra trong quá trình xử lý";

/// The order backend's response body.
///
/// Wire contract: `{ status, orderId?, payUrl?, message? }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OrderResponse {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Interpret the response against the chosen payment method.
    ///
    /// Success + vnpay + a redirect URL means the browsing context leaves
    /// for the payment page; any other success confirms the order locally.
    /// Non-success surfaces the server message, or the generic fallback.
    pub fn into_outcome(self, method: PaymentMethod) -> CheckoutOutcome {
        if !self.is_success() {
            return CheckoutOutcome::Failed {
                message: self
                    .message
                    .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string()),
            };
        }

        match (method, self.pay_url) {
            (PaymentMethod::VnPay, Some(pay_url)) if !pay_url.is_empty() => {
                CheckoutOutcome::Redirected { pay_url }
            }
            _ => CheckoutOutcome::Confirmed {
                order_id: self.order_id.unwrap_or_default(),
            },
        }
    }
}

/// Core trait for order submission backends.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Issue one submission attempt carrying the composed order.
    ///
    /// Transport failures map to `CheckoutError::Network`; a received
    /// response is returned as-is for outcome interpretation.
    async fn submit_order(&self, request: &OrderRequest) -> CheckoutResult<OrderResponse>;

    /// Backend name (for logging)
    fn backend_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedOrderGateway = Arc<dyn OrderGateway>;
