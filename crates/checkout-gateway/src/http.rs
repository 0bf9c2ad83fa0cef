//! # HTTP Order Gateway
//!
//! `OrderGateway` implementation that POSTs the composed order to the
//! backend's payments endpoint as JSON and parses the
//! `{status, orderId?, payUrl?, message?}` response.

use crate::config::GatewayConfig;
use async_trait::async_trait;
use checkout_core::{
    BuyerInfo, CheckoutError, CheckoutResult, LineItem, OrderGateway, OrderRequest, OrderResponse,
    PaymentMethod, GENERIC_FAILURE_MESSAGE,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Sentinel name for an item that reaches submission without one
const UNKNOWN_PRODUCT_NAME: &str = "Sản phẩm không xác định";

/// Default category for uncategorized items
const DEFAULT_CATEGORY: &str = "Linh kiện";

/// HTTP gateway to the order/payment backend
pub struct HttpOrderGateway {
    config: GatewayConfig,
    client: Client,
}

impl HttpOrderGateway {
    /// Create a new gateway. The client honors the configured timeout;
    /// without one it waits indefinitely for the backend.
    pub fn new(config: GatewayConfig) -> CheckoutResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CheckoutError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = GatewayConfig::from_env()?;
        Self::new(config)
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    #[instrument(
        skip(self, request),
        fields(
            items = request.line_items.len(),
            method = %request.payment_method,
            total = request.total_amount,
        )
    )]
    async fn submit_order(&self, request: &OrderRequest) -> CheckoutResult<OrderResponse> {
        if request.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        let payload = WireOrder::from_request(request);

        debug!(
            "Submitting order: {} items to {}",
            payload.line_items.len(),
            self.config.endpoint_url
        );

        let response = self
            .client
            .post(&self.config.endpoint_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Backend HTTP error: status={}, body={}", status, body);

            // A rejected order may still carry a structured message
            let message = serde_json::from_str::<OrderResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());

            return Err(CheckoutError::Backend { message });
        }

        let parsed: OrderResponse = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Serialization(format!("Failed to parse backend response: {}", e))
        })?;

        info!(
            "Backend responded: status={}, order_id={:?}",
            parsed.status, parsed.order_id
        );

        Ok(parsed)
    }

    fn backend_name(&self) -> &'static str {
        "order-backend"
    }
}

// =============================================================================
// Wire Types
// =============================================================================

/// The order exactly as the backend expects it
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireOrder<'a> {
    line_items: Vec<WireLineItem>,
    buyer_info: &'a BuyerInfo,
    payment_method: PaymentMethod,
    total_amount: i64,
    order_timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireLineItem {
    product_id: String,
    name: String,
    unit_price: i64,
    quantity: u32,
    category: String,
}

impl<'a> WireOrder<'a> {
    fn from_request(request: &'a OrderRequest) -> Self {
        Self {
            line_items: request.line_items.iter().map(normalize_item).collect(),
            buyer_info: &request.buyer_info,
            payment_method: request.payment_method,
            total_amount: request.total_amount,
            order_timestamp: request.order_timestamp,
        }
    }
}

/// Normalize one line item into the wire shape: blank name falls back to
/// the unknown-product sentinel, blank category to the default, and
/// quantity floors at 1.
fn normalize_item(item: &LineItem) -> WireLineItem {
    let name = if item.name.trim().is_empty() {
        UNKNOWN_PRODUCT_NAME.to_string()
    } else {
        item.name.clone()
    };

    let category = if item.category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        item.category.clone()
    };

    WireLineItem {
        product_id: item.product_id.clone(),
        name,
        unit_price: item.unit_price,
        quantity: item.quantity.max(1),
        category,
    }
}
