//! # Checkout Session
//!
//! One buyer's checkout from reconciliation to submission. The session
//! owns the reconciled line items, the buyer-info record, and the
//! submission state machine that keeps at most one attempt in flight.

use crate::collaborators::{CartStore, Navigator};
use checkout_core::{
    quote, reconcile, validate_buyer_info, BuyerInfo, CartSnapshot, CheckoutError, CheckoutOutcome,
    CheckoutResult, DirectProduct, LineItem, OrderGateway, OrderRequest, PaymentMethod, PriceQuote,
    ReconciledOrder, ValidationErrors,
};
use tracing::{error, info, instrument};
use uuid::Uuid;

/// Where the session stands in the submission state machine.
///
/// `Processing` is the sole concurrency guard: it is set before the
/// network call begins and left on every failure exit. `Redirected` and
/// `Confirmed` are terminal; `Failed` returns to an editable state that
/// permits resubmission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Editable, no attempt in flight
    Idle,
    /// A submission is in flight; repeat attempts are rejected
    Processing,
    /// Last attempt failed with this top-level message; resubmission allowed
    Failed(String),
    /// Terminal: browsing context left for the payment page
    Redirected(String),
    /// Terminal: order confirmed with this id, cart cleared
    Confirmed(String),
}

/// One checkout session
pub struct CheckoutSession {
    id: Uuid,
    order: ReconciledOrder,
    buyer: BuyerInfo,
    payment_method: PaymentMethod,
    errors: ValidationErrors,
    phase: SessionPhase,
}

impl CheckoutSession {
    /// Start a session over an already-reconciled order
    pub fn new(order: ReconciledOrder) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            buyer: BuyerInfo::new(),
            payment_method: PaymentMethod::default(),
            errors: ValidationErrors::new(),
            phase: SessionPhase::Idle,
        }
    }

    /// Start a session by reconciling the three possible order sources
    pub fn from_sources(
        direct: Option<&DirectProduct>,
        selected: Option<&[LineItem]>,
        cart: Option<&CartSnapshot>,
    ) -> Self {
        Self::new(reconcile(direct, selected, cart))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.order.line_items
    }

    pub fn subtotal(&self) -> i64 {
        self.order.subtotal
    }

    /// Current price quote (subtotal, shipping, total)
    pub fn price(&self) -> PriceQuote {
        quote(self.order.subtotal)
    }

    pub fn buyer(&self) -> &BuyerInfo {
        &self.buyer
    }

    /// Edit the buyer record through its pure setters:
    ///
    /// ```rust,ignore
    /// session.edit_buyer(|b| b.with_full_name("Nguyễn Văn A"));
    /// ```
    pub fn edit_buyer(&mut self, edit: impl FnOnce(BuyerInfo) -> BuyerInfo) {
        self.buyer = edit(std::mem::take(&mut self.buyer));
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    /// Field errors from the last validation pass
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Revalidate the buyer record, refreshing the field-error map.
    /// Returns true when the form is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_buyer_info(&self.buyer);
        self.errors.is_empty()
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, SessionPhase::Processing)
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.order.is_empty()
            && matches!(self.phase, SessionPhase::Idle | SessionPhase::Failed(_))
    }

    /// Execute one submission attempt.
    ///
    /// Order of checks: terminal/in-flight phase, empty order, line-item
    /// sanity, field validation — all before any network call. The
    /// `Processing` guard is set just before the call and released on
    /// every failure path; terminal successes keep their terminal phase.
    ///
    /// Outcome handling: `Failed` carries the top-level message and leaves
    /// line items and buyer info untouched for resubmission; `Redirected`
    /// hands the browsing context to the payment page; `Confirmed` clears
    /// the standing cart and shows the confirmation view.
    #[instrument(skip_all, fields(session = %self.id, method = %self.payment_method))]
    pub async fn submit(
        &mut self,
        gateway: &dyn OrderGateway,
        cart: &mut dyn CartStore,
        navigator: &mut dyn Navigator,
    ) -> CheckoutResult<CheckoutOutcome> {
        match &self.phase {
            SessionPhase::Processing => return Err(CheckoutError::SubmissionInFlight),
            SessionPhase::Redirected(_) | SessionPhase::Confirmed(_) => {
                return Err(CheckoutError::InvalidRequest(
                    "checkout already completed".to_string(),
                ));
            }
            SessionPhase::Idle | SessionPhase::Failed(_) => {}
        }

        if self.order.is_empty() {
            return Err(CheckoutError::EmptyOrder);
        }

        if let Some(bad) = self.order.line_items.iter().find(|item| !item.is_valid()) {
            return Err(CheckoutError::InvalidLineItem {
                product_id: bad.product_id.clone(),
            });
        }

        if !self.validate() {
            return Err(CheckoutError::ValidationFailed {
                errors: self.errors.clone(),
            });
        }

        let price = self.price();
        let request = OrderRequest::new(
            self.order.line_items.clone(),
            self.buyer.clone(),
            self.payment_method,
            price.total,
        );

        info!(
            "Submitting order: {} items, total={}",
            request.item_count(),
            price.total
        );

        self.phase = SessionPhase::Processing;

        let outcome = match gateway.submit_order(&request).await {
            Ok(response) => response.into_outcome(self.payment_method),
            Err(err) => CheckoutOutcome::Failed {
                message: err.user_message(),
            },
        };

        match &outcome {
            CheckoutOutcome::Failed { message } => {
                error!("Submission failed: {}", message);
                self.phase = SessionPhase::Failed(message.clone());
            }
            CheckoutOutcome::Redirected { pay_url } => {
                info!("Redirecting to payment page");
                self.phase = SessionPhase::Redirected(pay_url.clone());
                navigator.redirect_to_payment(pay_url);
            }
            CheckoutOutcome::Confirmed { order_id } => {
                info!("Order confirmed: {}", order_id);
                self.phase = SessionPhase::Confirmed(order_id.clone());
                cart.clear();
                navigator.show_confirmation(order_id);
            }
        }

        Ok(outcome)
    }
}
