//! End-of-game statistics supplied per player.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_COMBO_COUNT, MAX_REMAINING_CARDS};
use crate::PlayerId;

/// Raw facts for one player at the end of one game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Cards still in hand when the game ended. Zero marks the winner.
    pub remaining_cards: u32,
    /// Number of 同花顺 (straight flush) combinations played this game.
    pub straight_flush_count: u32,
    /// Number of 金刚 (quads) combinations played this game.
    pub quads_count: u32,
}

impl PlayerStats {
    #[must_use]
    pub fn new(remaining_cards: u32, straight_flush_count: u32, quads_count: u32) -> Self {
        Self {
            remaining_cards,
            straight_flush_count,
            quads_count,
        }
    }

    /// Clamp every field into its sane range. Inputs arrive pre-validated,
    /// but the engine clamps again so an out-of-range count can never
    /// distort a settlement.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            remaining_cards: self.remaining_cards.min(MAX_REMAINING_CARDS),
            straight_flush_count: self.straight_flush_count.min(MAX_COMBO_COUNT),
            quads_count: self.quads_count.min(MAX_COMBO_COUNT),
        }
    }

    /// Whether this hand went out (zero remaining cards).
    #[must_use]
    pub fn went_out(&self) -> bool {
        self.remaining_cards == 0
    }
}

/// Statistics for one game, keyed by player.
///
/// A player absent from the map is defined to have all-zero statistics —
/// defaulting, not an error. `BTreeMap` keeps downstream iteration
/// deterministic regardless of insertion order.
pub type GameStats = BTreeMap<PlayerId, PlayerStats>;

/// Look up a player's stats, applying the absent-means-zero default and
/// the range clamp in one step.
#[must_use]
pub fn stats_for(stats: &GameStats, id: PlayerId) -> PlayerStats {
    stats.get(&id).copied().unwrap_or_default().clamped()
}

#[cfg(any(test, feature = "test-helpers"))]
impl PlayerStats {
    /// A hand with only remaining cards, no combinations.
    #[must_use]
    pub fn dummy(remaining_cards: u32) -> Self {
        Self::new(remaining_cards, 0, 0)
    }

    /// A random in-range losing hand, for randomized invariant tests.
    #[must_use]
    pub fn dummy_random(rng: &mut impl rand::Rng) -> Self {
        Self::new(rng.gen_range(1..=13), rng.gen_range(0..=2), rng.gen_range(0..=1))
    }
}
