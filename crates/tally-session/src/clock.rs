//! Per-game clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Marks a game in progress. Created by `start_game`, consumed when the
/// results are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub started_at: DateTime<Utc>,
}

impl GameClock {
    /// Start the clock now.
    #[must_use]
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
        }
    }

    /// Whole seconds elapsed between start and `now`. Clamped at zero in
    /// case the wall clock moved backwards.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u64 {
        (now - self.started_at).num_seconds().max(0) as u64
    }

    /// `mm:ss` display of the elapsed time, minutes unbounded.
    #[must_use]
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let secs = self.elapsed_secs(now);
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
