//! # checkout-gateway
//!
//! HTTP gateway to the order/payment backend for checkout-rs.
//!
//! This crate provides:
//! - `HttpOrderGateway`, the `OrderGateway` implementation that POSTs the
//!   composed order as JSON and parses the backend's response
//! - `GatewayConfig`, environment-driven configuration
//!
//! ## Configuration
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `ORDER_BACKEND_URL` | yes | Order submission endpoint |
//! | `ORDER_BACKEND_TIMEOUT_SECS` | no | Request timeout; unset waits indefinitely |

pub mod config;
pub mod http;

pub use config::GatewayConfig;
pub use http::HttpOrderGateway;
