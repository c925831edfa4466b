//! End-to-end tests across the full stack: store -> session -> settlement.
//!
//! These exercise the whole evening-of-card-games flow: create a session,
//! play and settle several games, watch running balances stay zero-sum,
//! snapshot to disk and restore.

use rust_decimal::Decimal;
use tally_session::SessionStore;
use tally_settlement::{settle, verify_zero_sum};
use tally_types::*;

/// Helper: a store with one four-seat session under default rules
/// (base 1, per card 0.5, 同花顺 5, 金刚 10).
struct Table {
    store: SessionStore,
    session: SessionId,
}

impl Table {
    fn new() -> Self {
        let mut store = SessionStore::new();
        let session = store
            .create(
                "Friday Night @ UTown",
                RuleSet::default(),
                ["Player A", "Player B", "Player C", "Player D"],
            )
            .expect("four seats");
        Self { store, session }
    }

    fn seat_ids(&self) -> Vec<PlayerId> {
        self.store
            .get(self.session)
            .unwrap()
            .players
            .iter()
            .map(|p| p.id)
            .collect()
    }

    fn play(&mut self, per_seat: &[PlayerStats]) -> Result<GameRecord> {
        let ids = self.seat_ids();
        let stats: GameStats = ids.into_iter().zip(per_seat.iter().copied()).collect();
        let session = self.store.get_mut(self.session).unwrap();
        session.start_game()?;
        session.end_game(stats).cloned()
    }

    fn balance(&self, id: PlayerId) -> Decimal {
        self.store.get(self.session).unwrap().player(id).unwrap().balance
    }
}

// =============================================================================
// Test: the worked scenario — winner out, losers with 3, 5, 5 remaining
// =============================================================================
#[test]
fn e2e_plain_game_settles_and_updates_balances() {
    let mut table = Table::new();
    let ids = table.seat_ids();

    let record = table
        .play(&[
            PlayerStats::dummy(0),
            PlayerStats::dummy(3),
            PlayerStats::dummy(5),
            PlayerStats::dummy(5),
        ])
        .unwrap();

    assert_eq!(record.winner, ids[0]);
    // Winner: 2.5 + 3.5 + 3.5; A additionally pays 1 to each 5-card hand.
    assert_eq!(record.delta_for(ids[0]), Decimal::new(950, 2));
    assert_eq!(record.delta_for(ids[1]), Decimal::new(-450, 2));
    assert_eq!(record.delta_for(ids[2]), Decimal::new(-250, 2));
    assert_eq!(record.delta_for(ids[3]), Decimal::new(-250, 2));
    verify_zero_sum(&record.deltas).unwrap();

    // Balances mirror the single game's deltas.
    for id in ids {
        assert_eq!(table.balance(id), record.delta_for(id));
    }
}

// =============================================================================
// Test: winner's 同花顺 collects from every opponent on top of the payout
// =============================================================================
#[test]
fn e2e_winner_combo_collects_from_everyone() {
    let mut table = Table::new();
    let ids = table.seat_ids();

    let record = table
        .play(&[
            PlayerStats::new(0, 1, 0),
            PlayerStats::dummy(3),
            PlayerStats::dummy(5),
            PlayerStats::dummy(5),
        ])
        .unwrap();

    // 9.5 from the plain scenario plus 5 from each of three opponents.
    assert_eq!(record.delta_for(ids[0]), Decimal::new(2450, 2));
    verify_zero_sum(&record.deltas).unwrap();
}

// =============================================================================
// Test: two zero-card hands reject with the exact winner-count message
// =============================================================================
#[test]
fn e2e_double_winner_rejected_and_recoverable() {
    let mut table = Table::new();

    let err = table
        .play(&[
            PlayerStats::dummy(0),
            PlayerStats::dummy(0),
            PlayerStats::dummy(5),
            PlayerStats::dummy(5),
        ])
        .unwrap_err();
    assert!(matches!(err, TallyError::WinnerCount { found: 2 }));
    assert!(format!("{err}").contains("Need exactly ONE winner with 0 remaining cards."));

    // The failed game is still in progress; corrected input settles it.
    let ids = table.seat_ids();
    let stats: GameStats = ids
        .iter()
        .copied()
        .zip([
            PlayerStats::dummy(0),
            PlayerStats::dummy(2),
            PlayerStats::dummy(5),
            PlayerStats::dummy(5),
        ])
        .collect();
    let session = table.store.get_mut(table.session).unwrap();
    assert!(session.current_game.is_some());
    session.end_game(stats).unwrap();
    assert_eq!(session.games.len(), 1);
}

// =============================================================================
// Test: a seat absent from the stats map defaults to an all-zero hand
// =============================================================================
#[test]
fn e2e_absent_stats_default_to_zero() {
    let table = Table::new();
    let ids = table.seat_ids();
    let session = table.store.get(table.session).unwrap();

    // Only three seats report; the silent one has 0 remaining and wins.
    let stats: GameStats = ids[1..]
        .iter()
        .copied()
        .zip([
            PlayerStats::dummy(3),
            PlayerStats::dummy(5),
            PlayerStats::dummy(7),
        ])
        .collect();

    let settlement = settle(&session.roster(), &session.rules, &stats).unwrap();
    assert_eq!(settlement.winner, ids[0]);
    assert_eq!(settlement.check_sum, Decimal::ZERO);

    // But a second silent seat means a second zero-card hand: rejected.
    let stats: GameStats = ids[2..]
        .iter()
        .copied()
        .zip([PlayerStats::dummy(5), PlayerStats::dummy(7)])
        .collect();
    let err = settle(&session.roster(), &session.rules, &stats).unwrap_err();
    assert!(matches!(err, TallyError::WinnerCount { found: 2 }));
}

// =============================================================================
// Test: a long evening keeps the balance sheet zero-sum
// =============================================================================
#[test]
fn e2e_many_games_conserve_value() {
    let mut table = Table::new();
    let mut rng = rand::thread_rng();

    for round in 0..20 {
        let winner_seat = round % 4;
        let per_seat: Vec<PlayerStats> = (0..4)
            .map(|seat| {
                if seat == winner_seat {
                    PlayerStats::new(0, u32::from(round % 3 == 0), 0)
                } else {
                    PlayerStats::dummy_random(&mut rng)
                }
            })
            .collect();
        table.play(&per_seat).unwrap();
    }

    let session = table.store.get(table.session).unwrap();
    assert_eq!(session.games.len(), 20);
    verify_zero_sum(&session.balance_sheet()).unwrap();
    for record in &session.games {
        verify_zero_sum(&record.deltas).unwrap();
    }
}

// =============================================================================
// Test: snapshot to disk mid-session and restore without losing anything
// =============================================================================
#[test]
fn e2e_snapshot_survives_restart() {
    let mut table = Table::new();
    table
        .play(&[
            PlayerStats::dummy(0),
            PlayerStats::dummy(3),
            PlayerStats::dummy(5),
            PlayerStats::dummy(5),
        ])
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sessions.json");
    table.store.save(&path).unwrap();

    let restored = SessionStore::load(&path);
    assert_eq!(restored, table.store);

    let session = restored.get(table.session).unwrap();
    assert_eq!(session.games.len(), 1);
    verify_zero_sum(&session.balance_sheet()).unwrap();

    // Clearing records resets the restored copy to a fresh table.
    let mut restored = restored;
    restored.get_mut(table.session).unwrap().clear_records();
    let session = restored.get(table.session).unwrap();
    assert!(session.games.is_empty());
    assert!(session.players.iter().all(|p| p.balance.is_zero()));
}
