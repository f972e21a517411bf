//! Money Module
//!
//! Decimal monetary amounts tagged with a currency code.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

// == Money ==
/// A monetary amount in a given currency.
///
/// Amounts are kept at full precision while a cart is mutated and rounded to
/// two decimal places only when a cart is materialized for output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    /// Creates a Money value in the given currency.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Returns the same amount rounded to two decimal places.
    pub fn rounded(&self) -> Self {
        Self {
            amount: round_amount(self.amount),
            currency: self.currency.clone(),
        }
    }
}

// == Utility Functions ==
/// Flat tax rate applied to every cart subtotal (10%).
pub fn tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Rounds a monetary amount to two decimal places, half away from zero.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
