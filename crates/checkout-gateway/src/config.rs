//! # Gateway Configuration
//!
//! Configuration for the order-backend gateway, loaded from environment
//! variables.

use checkout_core::CheckoutError;
use std::env;
use std::time::Duration;

/// Order backend configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Full URL of the order submission endpoint
    pub endpoint_url: String,

    /// Request timeout. `None` waits indefinitely, matching the stock
    /// behavior; set `ORDER_BACKEND_TIMEOUT_SECS` to bound it.
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `ORDER_BACKEND_URL`
    ///
    /// Optional:
    /// - `ORDER_BACKEND_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let endpoint_url = env::var("ORDER_BACKEND_URL")
            .map_err(|_| CheckoutError::Configuration("ORDER_BACKEND_URL not set".to_string()))?;

        if !endpoint_url.starts_with("http://") && !endpoint_url.starts_with("https://") {
            return Err(CheckoutError::Configuration(
                "ORDER_BACKEND_URL must be an http(s) URL".to_string(),
            ));
        }

        let timeout = match env::var("ORDER_BACKEND_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    CheckoutError::Configuration(
                        "ORDER_BACKEND_TIMEOUT_SECS must be a positive integer".to_string(),
                    )
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            endpoint_url,
            timeout,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            timeout: None,
        }
    }

    /// Builder: set a request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
