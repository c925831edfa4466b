//! Betting rules for one session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four betting constants fixed when a session is created.
///
/// All fields are expected non-negative; enforcing that is caller-side
/// policy. The settlement engine preserves the zero-sum invariant either
/// way, since every transfer debits and credits the same amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Flat amount each loser pays the winner.
    pub base_stake: Decimal,
    /// Amount per remaining card, used for both the winner payout and the
    /// inter-loser differential.
    pub per_card_rate: Decimal,
    /// Reward per 同花顺 (straight flush), paid by every opponent.
    pub reward_straight_flush: Decimal,
    /// Reward per 金刚 (quads), paid by every opponent.
    pub reward_quads: Decimal,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            base_stake: Decimal::ONE,
            per_card_rate: Decimal::new(5, 1), // 0.5
            reward_straight_flush: Decimal::new(5, 0),
            reward_quads: Decimal::new(10, 0),
        }
    }
}
