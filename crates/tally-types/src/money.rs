//! Monetary rounding and display helpers.
//!
//! All amounts are [`rust_decimal::Decimal`] rounded to 2 decimal places at
//! every transfer, so delta sums come out exactly zero rather than within a
//! floating-point epsilon.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DP;

/// Round an amount to monetary precision (2 dp, midpoint away from zero).
#[must_use]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a delta with an explicit sign: `+2.50`, `-3.00`, `0.00`.
#[must_use]
pub fn format_signed(amount: Decimal) -> String {
    let rounded = round_money(amount);
    if rounded > Decimal::ZERO {
        format!("+{rounded:.2}")
    } else {
        format!("{rounded:.2}")
    }
}
