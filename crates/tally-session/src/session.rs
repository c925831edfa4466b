//! One scoring session: rules, seats, running balances, game history.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_settlement::settle;
use tally_types::{
    round_money, GameId, GameRecord, GameStats, Player, PlayerId, Result, RuleSet, SeatedPlayer,
    SessionId, TallyError,
};

use crate::clock::GameClock;

/// A group of players sharing one rule set across many games.
///
/// Balances are only ever changed by applying a settlement's deltas or by
/// [`Session::clear_records`], so the balance sheet stays zero-sum for the
/// life of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub rules: RuleSet,
    pub players: Vec<SeatedPlayer>,
    /// Settled games, oldest first.
    pub games: Vec<GameRecord>,
    /// The running game clock, if a game is in progress.
    pub current_game: Option<GameClock>,
}

impl Session {
    /// Create a session with one zero-balance seat per name.
    ///
    /// # Errors
    /// [`TallyError::NoPlayers`] if `player_names` is empty.
    pub fn new(
        name: impl Into<String>,
        rules: RuleSet,
        player_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Self> {
        let players: Vec<SeatedPlayer> = player_names
            .into_iter()
            .map(|n| SeatedPlayer::new(n.into()))
            .collect();
        if players.is_empty() {
            return Err(TallyError::NoPlayers);
        }
        Ok(Self {
            id: SessionId::new(),
            name: name.into(),
            created_at: Utc::now(),
            rules,
            players,
            games: Vec::new(),
            current_game: None,
        })
    }

    /// The engine-facing participant list.
    #[must_use]
    pub fn roster(&self) -> Vec<Player> {
        self.players.iter().map(SeatedPlayer::as_player).collect()
    }

    /// Look up a seat by player id.
    pub fn player(&self, id: PlayerId) -> Result<&SeatedPlayer> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .ok_or(TallyError::PlayerNotFound(id))
    }

    /// Rename a seat. The balance remains.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<()> {
        let seat = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(TallyError::PlayerNotFound(id))?;
        seat.name = name.into();
        Ok(())
    }

    /// Start the game clock.
    ///
    /// # Errors
    /// [`TallyError::GameAlreadyInProgress`] if a clock is already running.
    pub fn start_game(&mut self) -> Result<GameClock> {
        if self.current_game.is_some() {
            return Err(TallyError::GameAlreadyInProgress);
        }
        let clock = GameClock::start();
        self.current_game = Some(clock);
        tracing::debug!(session = %self.id, "game started");
        Ok(clock)
    }

    /// Settle the running game from its raw statistics.
    ///
    /// On success the deltas are folded into the running balances, the
    /// game is archived, and the clock is cleared. On error nothing
    /// changes — the game stays in progress so the caller can re-prompt
    /// for corrected input.
    ///
    /// # Errors
    /// [`TallyError::NoGameInProgress`] if no clock is running, or the
    /// settlement engine's [`TallyError::WinnerCount`] validation error.
    pub fn end_game(&mut self, stats: GameStats) -> Result<&GameRecord> {
        let clock = self.current_game.ok_or(TallyError::NoGameInProgress)?;
        let settlement = settle(&self.roster(), &self.rules, &stats)?;

        for seat in &mut self.players {
            let delta = settlement
                .deltas
                .get(&seat.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            seat.balance = round_money(seat.balance + delta);
        }

        let ended_at = Utc::now();
        let record = GameRecord {
            id: GameId::new(),
            started_at: clock.started_at,
            ended_at,
            duration_secs: clock.elapsed_secs(ended_at),
            winner: settlement.winner,
            deltas: settlement.deltas,
            stats,
        };
        tracing::info!(
            session = %self.id,
            game = %record.id,
            winner = %record.winner,
            duration_secs = record.duration_secs,
            "game settled and archived"
        );

        self.current_game = None;
        self.games.push(record);
        Ok(self.games.last().expect("record was just pushed"))
    }

    /// Wipe the game history, zero all balances, and abort any running
    /// game.
    pub fn clear_records(&mut self) {
        let dropped = self.games.len();
        self.games.clear();
        self.current_game = None;
        for seat in &mut self.players {
            seat.balance = Decimal::ZERO;
        }
        tracing::info!(session = %self.id, dropped, "records cleared");
    }

    /// Current balance per seat.
    #[must_use]
    pub fn balance_sheet(&self) -> BTreeMap<PlayerId, Decimal> {
        self.players.iter().map(|p| (p.id, p.balance)).collect()
    }
}
