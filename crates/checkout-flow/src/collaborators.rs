//! # Collaborator Seams
//!
//! The two external collaborators the checkout session drives: the
//! standing cart store (cleared on confirmed non-redirect success) and the
//! navigation layer (payment redirect or confirmation view).

use checkout_core::{CartSnapshot, LineItem};

/// The standing cart the buyer accumulated before checkout
pub trait CartStore: Send {
    /// Current cart contents
    fn items(&self) -> Vec<LineItem>;

    /// The cart's own precomputed total
    fn total(&self) -> i64;

    /// Empty the cart. Invoked only on confirmed non-redirect success.
    fn clear(&mut self);

    /// Snapshot for source reconciliation
    fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items(),
            total: self.total(),
        }
    }
}

/// Navigation collaborator for the two success outcomes
pub trait Navigator: Send {
    /// Full browsing-context navigation to the external payment page.
    /// Control leaves the app after this call.
    fn redirect_to_payment(&mut self, pay_url: &str);

    /// Transition to the order-confirmation view
    fn show_confirmation(&mut self, order_id: &str);
}

/// Session-scoped in-memory cart store
#[derive(Debug, Default)]
pub struct InMemoryCart {
    items: Vec<LineItem>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, merging quantity onto an existing line for the same
    /// product
    pub fn add(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartStore for InMemoryCart {
    fn items(&self) -> Vec<LineItem> {
        self.items.clone()
    }

    fn total(&self) -> i64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
