//! # Order Types
//!
//! Line items, buyer info, and the composed order request for checkout-rs.
//! All monetary amounts are VND in the smallest unit (zero-decimal), held
//! as exact integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback image reference for items without one
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

/// A line item in an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product ID
    pub product_id: String,

    /// Product name (denormalized for display)
    pub name: String,

    /// Unit price in VND
    pub unit_price: i64,

    /// Quantity
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Product category
    pub category: String,

    /// Optional image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

impl LineItem {
    /// Create a line item with quantity 1
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        unit_price: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
            category: category.into(),
            image_url: None,
        }
    }

    /// Builder: set quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Total price for this line item
    pub fn line_total(&self) -> i64 {
        self.unit_price * self.quantity as i64
    }

    /// An item is submittable only with a positive quantity and
    /// a non-negative unit price
    pub fn is_valid(&self) -> bool {
        self.quantity > 0 && self.unit_price >= 0
    }

    /// Image URL, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }
}

/// Buyer-supplied shipping and contact data.
///
/// Created empty at checkout start, edited field-by-field via the pure
/// `with_*` setters, read once at submission time. Never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub district: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub note: String,
}

impl BuyerInfo {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = value.into();
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = value.into();
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = value.into();
        self
    }

    pub fn with_city(mut self, value: impl Into<String>) -> Self {
        self.city = value.into();
        self
    }

    pub fn with_district(mut self, value: impl Into<String>) -> Self {
        self.district = value.into();
        self
    }

    pub fn with_ward(mut self, value: impl Into<String>) -> Self {
        self.ward = value.into();
        self
    }

    pub fn with_note(mut self, value: impl Into<String>) -> Self {
        self.note = value.into();
        self
    }
}

/// Payment method chosen at checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery (immediate confirmation)
    Cod,
    /// VNPay hosted payment page (redirect flow)
    VnPay,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cod
    }
}

impl PaymentMethod {
    /// Wire name for the backend contract
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::VnPay => "vnpay",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The composed order, built once per submission attempt and sent as the
/// sole payload of the submission call. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Line items
    pub line_items: Vec<LineItem>,

    /// Buyer shipping and contact data
    pub buyer_info: BuyerInfo,

    /// Chosen payment method
    pub payment_method: PaymentMethod,

    /// Grand total (subtotal + shipping), VND
    pub total_amount: i64,

    /// ISO-8601 submission timestamp
    pub order_timestamp: DateTime<Utc>,
}

impl OrderRequest {
    /// Compose an order request, stamping the current time
    pub fn new(
        line_items: Vec<LineItem>,
        buyer_info: BuyerInfo,
        payment_method: PaymentMethod,
        total_amount: i64,
    ) -> Self {
        Self {
            line_items,
            buyer_info,
            payment_method,
            total_amount,
            order_timestamp: Utc::now(),
        }
    }

    /// Check if the order has no items
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    /// Get item count across all lines
    pub fn item_count(&self) -> u32 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}

/// Discriminated outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum CheckoutOutcome {
    /// Order accepted; caller clears the cart and shows confirmation
    Confirmed { order_id: String },
    /// Caller must navigate the browsing context to the payment page
    Redirected { pay_url: String },
    /// Rejected by the backend; user may correct and resubmit
    Failed { message: String },
}

impl CheckoutOutcome {
    /// True for the two terminal success outcomes
    pub fn is_success(&self) -> bool {
        !matches!(self, CheckoutOutcome::Failed { .. })
    }
}
