//! # checkout-core
//!
//! Core types and logic for the checkout-rs order composer.
//!
//! This crate provides:
//! - `LineItem`, `BuyerInfo`, `OrderRequest`, and `CheckoutOutcome` for the
//!   checkout data model
//! - `reconcile` for merging the three possible order sources
//! - `validate_buyer_info` for the shipping-form rules
//! - `quote` and `shipping_cost` for pricing
//! - `OrderGateway` trait for implementing submission backends
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{reconcile, validate_buyer_info, quote, BuyerInfo, OrderRequest, PaymentMethod};
//!
//! // Merge the order sources (direct buy wins)
//! let order = reconcile(Some(&product), None, None);
//!
//! // Validate the shipping form
//! let errors = validate_buyer_info(&buyer);
//! assert!(errors.is_empty());
//!
//! // Price it and compose the request
//! let price = quote(order.subtotal);
//! let request = OrderRequest::new(order.line_items, buyer, PaymentMethod::Cod, price.total);
//!
//! // Submit via an OrderGateway implementation
//! let response = gateway.submit_order(&request).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod order;
pub mod pricing;
pub mod reconcile;
pub mod validate;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{
    BoxedOrderGateway, OrderGateway, OrderResponse, GENERIC_FAILURE_MESSAGE, STATUS_SUCCESS,
};
pub use order::{
    BuyerInfo, CheckoutOutcome, LineItem, OrderRequest, PaymentMethod, PLACEHOLDER_IMAGE,
};
pub use pricing::{
    format_vnd, quote, shipping_cost, PriceQuote, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD,
};
pub use reconcile::{reconcile, CartSnapshot, DirectProduct, OrderSource, ReconciledOrder};
pub use validate::{validate_buyer_info, RegionCatalog, ValidationErrors};
