//! # Source Reconciliation
//!
//! A checkout can be reached from three places: a direct "buy now" on a
//! product page, a selection forwarded from the cart screen, or the
//! standing cart itself. Exactly one source supplies the line items for a
//! given reconciliation; the fixed priority below decides which.

use crate::order::{LineItem, PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};

/// A single product arriving from a direct "buy now" navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectProduct {
    /// Product ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price in VND
    pub price: i64,

    /// Product category
    pub category: String,

    /// Product images; the first one is used on the order line
    #[serde(default)]
    pub images: Vec<String>,
}

/// The standing cart's contents: items plus its own precomputed total.
///
/// The total is passed through as-is, never recomputed here; the cart
/// store is the source of truth for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub total: i64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Which source won the reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    /// Direct "buy now" product
    DirectBuy,
    /// Pre-selected items forwarded from the cart screen
    Selection,
    /// The standing cart contents
    StandingCart,
    /// Nothing to check out
    Empty,
}

/// The reconciled line items, tagged with the winning source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciledOrder {
    pub source: OrderSource,
    pub line_items: Vec<LineItem>,
    pub subtotal: i64,
}

impl ReconciledOrder {
    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }
}

/// Merge the three optional origin payloads into one order.
///
/// First match wins, in this fixed order:
/// 1. direct product — one line, quantity fixed at 1, subtotal = unit price
/// 2. non-empty selection — used verbatim, subtotal = sum of line totals
/// 3. non-empty cart snapshot — items and precomputed total passed through
/// 4. otherwise an empty order with subtotal 0
///
/// Pure derivation; callers recompute whenever any input changes.
pub fn reconcile(
    direct: Option<&DirectProduct>,
    selected: Option<&[LineItem]>,
    cart: Option<&CartSnapshot>,
) -> ReconciledOrder {
    if let Some(product) = direct {
        let image_url = product
            .images
            .first()
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        let item = LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
            category: product.category.clone(),
            image_url: Some(image_url),
        };

        return ReconciledOrder {
            source: OrderSource::DirectBuy,
            subtotal: product.price,
            line_items: vec![item],
        };
    }

    if let Some(items) = selected {
        if !items.is_empty() {
            return ReconciledOrder {
                source: OrderSource::Selection,
                subtotal: items.iter().map(LineItem::line_total).sum(),
                line_items: items.to_vec(),
            };
        }
    }

    if let Some(snapshot) = cart {
        if !snapshot.is_empty() {
            return ReconciledOrder {
                source: OrderSource::StandingCart,
                line_items: snapshot.items.clone(),
                subtotal: snapshot.total,
            };
        }
    }

    ReconciledOrder {
        source: OrderSource::Empty,
        line_items: Vec::new(),
        subtotal: 0,
    }
}
