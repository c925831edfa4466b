//! # tally-types
//!
//! Shared types, errors, and constants for the **Tabletally** scorekeeper.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PlayerId`], [`SessionId`], [`GameId`]
//! - **Player model**: [`Player`], [`SeatedPlayer`]
//! - **Rule model**: [`RuleSet`]
//! - **Statistics model**: [`PlayerStats`], [`GameStats`]
//! - **Record model**: [`GameRecord`]
//! - **Money helpers**: [`round_money`], [`format_signed`]
//! - **Errors**: [`TallyError`] with `TLY_ERR_` prefix codes
//! - **Constants**: card bounds, money precision, defaults

pub mod constants;
pub mod error;
pub mod ids;
pub mod money;
pub mod player;
pub mod record;
pub mod rules;
pub mod stats;

// Re-export all primary types at crate root for ergonomic imports:
//   use tally_types::{Player, RuleSet, GameStats, ...};

pub use error::*;
pub use ids::*;
pub use money::*;
pub use player::*;
pub use record::*;
pub use rules::*;
pub use stats::*;

// Constants are accessed via `tally_types::constants::FOO`
// (not re-exported to avoid name collisions).
