//! # Order Flow
//!
//! Placing an order is a small state machine driven by the user's answers:
//!
//! ```text
//! Offer ──yes──▶ AskQuantity ──q in 1..=available──▶ Accepted(q)
//!   │               │  ▲   │
//!   no              │  │   └──q <= 0──▶ AskQuantity (validation error)
//!   ▼               │  │
//! Declined     q > available
//!   ▲               ▼  │yes
//!   │          ConfirmMax ──yes──▶ Accepted(available)
//!   │               │no
//!   └────no──── AskRetry
//! ```
//!
//! The flow never reads input itself. The caller asks the question matching
//! [`OrderFlow::state`] and feeds the answer back through [`OrderFlow::answer`]
//! or [`OrderFlow::submit_quantity`].

use crate::error::{Result, WarehouseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// "Would you like to order?"
    Offer,
    AskQuantity,
    /// The request exceeded stock; "order the maximum instead?"
    ConfirmMax,
    /// The maximum was refused; "order a different amount?"
    AskRetry,
    Accepted(u32),
    Declined,
}

/// What happened to a submitted quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    Accepted(u32),
    ExceedsAvailable { available: u32 },
    NotPositive,
}

#[derive(Debug, Clone)]
pub struct OrderFlow {
    available: u32,
    state: OrderState,
}

impl OrderFlow {
    pub fn new(available: u32) -> Result<Self> {
        if available == 0 {
            return Err(WarehouseError::InvalidTransition(
                "cannot order an item that is not in stock".to_string(),
            ));
        }
        Ok(Self {
            available,
            state: OrderState::Offer,
        })
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.state, OrderState::Accepted(_) | OrderState::Declined)
    }

    /// The ordered amount once the flow has finished, `None` if nothing was ordered.
    pub fn ordered(&self) -> Option<u32> {
        match self.state {
            OrderState::Accepted(amount) => Some(amount),
            _ => None,
        }
    }

    /// Answers the yes/no question of the current state.
    pub fn answer(&mut self, yes: bool) -> Result<OrderState> {
        self.state = match (self.state, yes) {
            (OrderState::Offer, true) => OrderState::AskQuantity,
            (OrderState::Offer, false) => OrderState::Declined,
            (OrderState::ConfirmMax, true) => OrderState::Accepted(self.available),
            (OrderState::ConfirmMax, false) => OrderState::AskRetry,
            (OrderState::AskRetry, true) => OrderState::AskQuantity,
            (OrderState::AskRetry, false) => OrderState::Declined,
            (state, _) => {
                return Err(WarehouseError::InvalidTransition(format!(
                    "no yes/no question is pending in state {:?}",
                    state
                )))
            }
        };
        tracing::debug!(state = ?self.state, yes, "order answer");
        Ok(self.state)
    }

    /// Submits the quantity typed in the `AskQuantity` state.
    pub fn submit_quantity(&mut self, quantity: i64) -> Result<QuantityOutcome> {
        if self.state != OrderState::AskQuantity {
            return Err(WarehouseError::InvalidTransition(format!(
                "no quantity is pending in state {:?}",
                self.state
            )));
        }

        let outcome = if quantity <= 0 {
            QuantityOutcome::NotPositive
        } else if quantity > i64::from(self.available) {
            self.state = OrderState::ConfirmMax;
            QuantityOutcome::ExceedsAvailable {
                available: self.available,
            }
        } else {
            // quantity is within 1..=available, which fits in u32
            let amount = quantity as u32;
            self.state = OrderState::Accepted(amount);
            QuantityOutcome::Accepted(amount)
        };
        tracing::debug!(quantity, outcome = ?outcome, "order quantity");
        Ok(outcome)
    }
}

/// `"<amount> <item> has been ordered"`, with "have" for any amount but one.
pub fn confirmation(amount: u32, item: &str) -> String {
    let verb = if amount == 1 { "has" } else { "have" };
    format!("{} {} {} been ordered", amount, item, verb)
}
