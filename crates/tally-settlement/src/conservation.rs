//! Zero-sum invariant checker.
//!
//! Invariant for every settlement:
//! ```text
//! Σ deltas == 0
//! ```
//!
//! Every currency unit leaving one player enters another, so the delta map
//! must sum to zero at monetary precision. The engine reports its own sum
//! advisorily in [`Settlement::check_sum`]; this checker is for callers
//! that want a hard failure before applying deltas to stored balances.
//!
//! [`Settlement::check_sum`]: crate::Settlement

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tally_types::{round_money, PlayerId, Result, TallyError};

/// Sum of a delta map at monetary precision.
#[must_use]
pub fn delta_sum(deltas: &BTreeMap<PlayerId, Decimal>) -> Decimal {
    round_money(deltas.values().copied().sum())
}

/// Verify that a delta map conserves value.
///
/// # Errors
/// Returns [`TallyError::ZeroSumViolation`] if the rounded sum is nonzero.
pub fn verify_zero_sum(deltas: &BTreeMap<PlayerId, Decimal>) -> Result<()> {
    let sum = delta_sum(deltas);
    if !sum.is_zero() {
        tracing::warn!(%sum, "delta map does not sum to zero");
        return Err(TallyError::ZeroSumViolation { sum });
    }
    Ok(())
}
