//! System-wide bounds and defaults.

/// A standard deck holds 52 cards, so no hand can exceed this.
pub const MAX_REMAINING_CARDS: u32 = 52;

/// Upper bound on per-game special-combination counts. Generous; a real
/// game produces at most a handful.
pub const MAX_COMBO_COUNT: u32 = 50;

/// Monetary precision: all amounts are rounded to 2 decimal places.
pub const MONEY_DP: u32 = 2;

/// Big Two is a four-player game; sessions default to four seats.
pub const DEFAULT_PLAYER_COUNT: usize = 4;
