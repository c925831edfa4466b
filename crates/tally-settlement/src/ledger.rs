//! Explicit transfer accumulator.
//!
//! Every settlement builds its own [`DeltaLedger`] from the participant
//! list and threads all transfers through it, so the engine never touches
//! caller-owned balances. Because each transfer debits and credits the
//! same rounded amount, the ledger sums to zero by construction.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tally_types::{round_money, PlayerId};

/// Working delta map for one settlement, one entry per participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaLedger {
    deltas: BTreeMap<PlayerId, Decimal>,
}

impl DeltaLedger {
    /// Open a ledger with a zero delta for every participant.
    #[must_use]
    pub fn new(players: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            deltas: players.into_iter().map(|id| (id, Decimal::ZERO)).collect(),
        }
    }

    /// Move `amount` from one player to another, rounded to monetary
    /// precision. Exact-zero transfers and self-transfers are no-ops and
    /// are not recorded.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: Decimal) {
        let amount = round_money(amount);
        if amount.is_zero() || from == to {
            return;
        }
        *self.deltas.entry(from).or_insert(Decimal::ZERO) -= amount;
        *self.deltas.entry(to).or_insert(Decimal::ZERO) += amount;
    }

    /// Current delta for one player.
    #[must_use]
    pub fn delta(&self, id: PlayerId) -> Decimal {
        self.deltas.get(&id).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of all deltas. Zero unless something is badly wrong.
    #[must_use]
    pub fn sum(&self) -> Decimal {
        self.deltas.values().copied().sum()
    }

    /// Consume the ledger, yielding the final delta map.
    #[must_use]
    pub fn into_deltas(self) -> BTreeMap<PlayerId, Decimal> {
        self.deltas
    }
}
