//! Player records.
//!
//! [`Player`] is the read-only shape the settlement engine consumes (only
//! the id is semantically used). [`SeatedPlayer`] is the session-side seat
//! with a running balance across games.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// A settlement participant. Owned by the caller; the engine never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
        }
    }
}

/// A seat in a session: a player plus their running balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatedPlayer {
    pub id: PlayerId,
    pub name: String,
    /// Net winnings across all settled games in the session.
    pub balance: Decimal,
}

impl SeatedPlayer {
    /// Seat a new player with a zero balance.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            balance: Decimal::ZERO,
        }
    }

    /// The engine-facing view of this seat.
    #[must_use]
    pub fn as_player(&self) -> Player {
        Player {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seated_player_starts_even() {
        let seat = SeatedPlayer::new("Alice");
        assert_eq!(seat.balance, Decimal::ZERO);
        assert_eq!(seat.name, "Alice");
    }

    #[test]
    fn as_player_preserves_identity() {
        let seat = SeatedPlayer::new("Bob");
        let player = seat.as_player();
        assert_eq!(player.id, seat.id);
        assert_eq!(player.name, seat.name);
    }

    #[test]
    fn seated_player_serde_roundtrip() {
        let seat = SeatedPlayer {
            id: PlayerId::new(),
            name: "Carol".to_string(),
            balance: Decimal::new(-350, 2),
        };
        let json = serde_json::to_string(&seat).unwrap();
        let back: SeatedPlayer = serde_json::from_str(&json).unwrap();
        assert_eq!(seat, back);
    }
}
