//! Archived game records.
//!
//! Every settled game produces an immutable [`GameRecord`] appended to the
//! session history: who won, each player's delta, the raw statistics the
//! settlement was computed from, and timing.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{GameId, GameStats, PlayerId};

/// An immutable record of one settled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    /// When the game clock was started.
    pub started_at: DateTime<Utc>,
    /// When the result was entered and settled.
    pub ended_at: DateTime<Utc>,
    /// Whole seconds between start and settlement.
    pub duration_secs: u64,
    /// The unique player who went out.
    pub winner: PlayerId,
    /// Net monetary change per player. Sums to exactly zero.
    pub deltas: BTreeMap<PlayerId, Decimal>,
    /// The raw statistics the deltas were computed from.
    pub stats: GameStats,
}

impl GameRecord {
    /// This game's delta for one player (zero if they have no entry).
    #[must_use]
    pub fn delta_for(&self, id: PlayerId) -> Decimal {
        self.deltas.get(&id).copied().unwrap_or(Decimal::ZERO)
    }
}
