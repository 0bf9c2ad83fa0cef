//! # checkout-flow
//!
//! Checkout session orchestration for checkout-rs.
//!
//! This crate provides:
//! - `CheckoutSession`, the submission state machine driving one checkout
//! - `CartStore` and `Navigator`, the collaborator seams toward the
//!   rendering layer
//! - `InMemoryCart`, a session-scoped standing cart
//!
//! ## Flow
//!
//! ```text
//! {Idle} --submit--> {Processing} --failure--> {Failed}   (retry allowed)
//!                          |------success+vnpay--> {Redirected}  (terminal)
//!                          |------success--------> {Confirmed}   (terminal,
//!                                                   cart cleared)
//! ```

pub mod collaborators;
pub mod session;

pub use collaborators::{CartStore, InMemoryCart, Navigator};
pub use session::{CheckoutSession, SessionPhase};
