//! # tally-session
//!
//! The stateful side of the scorekeeper: sessions own the betting rules,
//! the seated players with their running balances, and the archive of
//! settled games. Settlement itself stays in `tally-settlement`; this
//! crate applies its results.
//!
//! A [`Session`] runs one game at a time: [`Session::start_game`] stamps
//! the clock, [`Session::end_game`] takes the raw statistics, settles
//! them, folds the deltas into balances, and archives a `GameRecord`.
//! [`SessionStore`] holds sessions newest-first and snapshots the whole
//! registry to JSON.

pub mod clock;
pub mod session;
pub mod store;

pub use clock::GameClock;
pub use session::Session;
pub use store::SessionStore;
