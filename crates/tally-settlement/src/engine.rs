//! The settlement computation.
//!
//! `settle` is deliberately order-independent: the delta map is keyed by
//! `PlayerId` and decimal arithmetic is exact at monetary precision, so
//! reordering the participant slice cannot change any final delta.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_types::{round_money, stats_for, GameStats, Player, PlayerId, Result, RuleSet, TallyError};

use crate::ledger::DeltaLedger;

/// The outcome of one settlement: who won, what everyone owes, and an
/// advisory verification sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The unique player who went out.
    pub winner: PlayerId,
    /// Net monetary change per participant. Sums to exactly zero.
    pub deltas: BTreeMap<PlayerId, Decimal>,
    /// Sum of all deltas at monetary precision. Always zero here; callers
    /// should treat anything else as a defect signal.
    pub check_sum: Decimal,
}

/// Settle one game.
///
/// Missing `stats` entries default to all-zero statistics; out-of-range
/// counts are clamped. The only detectable error is the winner-count
/// precondition: exactly one participant must have 0 remaining cards.
///
/// # Errors
/// [`TallyError::WinnerCount`] when zero or multiple players went out. No
/// partial computation is performed in that case.
pub fn settle(players: &[Player], rules: &RuleSet, stats: &GameStats) -> Result<Settlement> {
    let winners: Vec<PlayerId> = players
        .iter()
        .filter(|p| stats_for(stats, p.id).went_out())
        .map(|p| p.id)
        .collect();
    let &[winner] = winners.as_slice() else {
        return Err(TallyError::WinnerCount {
            found: winners.len(),
        });
    };

    let mut ledger = DeltaLedger::new(players.iter().map(|p| p.id));

    // Layer 1: each loser pays the winner a base stake plus a per-card
    // penalty on their remaining hand.
    for player in players {
        if player.id == winner {
            continue;
        }
        let remaining = Decimal::from(stats_for(stats, player.id).remaining_cards);
        ledger.transfer(player.id, winner, rules.base_stake + remaining * rules.per_card_rate);
    }

    // Layer 2: among losers, each unordered pair settles the difference in
    // remaining cards, higher hand paying lower. Equal hands exchange
    // nothing.
    let losers: Vec<(PlayerId, u32)> = players
        .iter()
        .filter(|p| p.id != winner)
        .map(|p| (p.id, stats_for(stats, p.id).remaining_cards))
        .collect();
    for (i, &(id_a, cards_a)) in losers.iter().enumerate() {
        for &(id_b, cards_b) in &losers[i + 1..] {
            if cards_a > cards_b {
                ledger.transfer(id_a, id_b, Decimal::from(cards_a - cards_b) * rules.per_card_rate);
            } else if cards_b > cards_a {
                ledger.transfer(id_b, id_a, Decimal::from(cards_b - cards_a) * rules.per_card_rate);
            }
        }
    }

    // Layer 3: combination rewards, winner included. Each combo earns its
    // holder a reward from every opponent; nobody pays themselves.
    for player in players {
        let player_stats = stats_for(stats, player.id);
        let per_opponent = Decimal::from(player_stats.straight_flush_count)
            * rules.reward_straight_flush
            + Decimal::from(player_stats.quads_count) * rules.reward_quads;
        if per_opponent.is_zero() {
            continue;
        }
        for other in players {
            if other.id != player.id {
                ledger.transfer(other.id, player.id, per_opponent);
            }
        }
    }

    let check_sum = round_money(ledger.sum());
    tracing::debug!(
        winner = %winner,
        players = players.len(),
        %check_sum,
        "game settled"
    );

    Ok(Settlement {
        winner,
        deltas: ledger.into_deltas(),
        check_sum,
    })
}
