//! # tally-settlement
//!
//! Pure settlement engine: converts raw end-of-game facts (remaining cards
//! per player, special-combination counts) into a zero-sum set of monetary
//! transfers under a layered rule set.
//!
//! ## Rule layers
//!
//! 1. The unique player with 0 remaining cards is the winner.
//! 2. Each loser pays the winner `base_stake + remaining * per_card_rate`.
//! 3. Among losers, the higher remaining count pays the lower the
//!    difference times `per_card_rate`, once per unordered pair.
//! 4. Each 同花顺 / 金刚 earns its holder a reward from every opponent,
//!    winner included.
//!
//! The engine is a synchronous pure computation over immutable inputs: no
//! I/O, no hidden state, no mutation of caller-owned structures. All
//! effects come back in the returned [`Settlement`].

pub mod conservation;
pub mod engine;
pub mod ledger;

pub use conservation::{delta_sum, verify_zero_sum};
pub use engine::{settle, Settlement};
pub use ledger::DeltaLedger;
