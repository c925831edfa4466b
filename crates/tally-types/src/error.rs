//! Error types for the Tabletally scorekeeper.
//!
//! All errors use the `TLY_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Settlement validation errors
//! - 2xx: Session errors
//! - 3xx: Game lifecycle errors
//! - 4xx: Conservation errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{PlayerId, SessionId};

/// Central error enum for all Tabletally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    // =================================================================
    // Settlement Validation Errors (1xx)
    // =================================================================
    /// Zero or multiple players had 0 remaining cards. Always recoverable:
    /// the caller re-prompts for corrected input.
    #[error("TLY_ERR_100: Need exactly ONE winner with 0 remaining cards. (found {found})")]
    WinnerCount { found: usize },

    // =================================================================
    // Session Errors (2xx)
    // =================================================================
    /// The requested session does not exist in the store.
    #[error("TLY_ERR_200: Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The requested player is not seated in this session.
    #[error("TLY_ERR_201: Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// A session needs at least one seated player.
    #[error("TLY_ERR_202: Session has no players")]
    NoPlayers,

    // =================================================================
    // Game Lifecycle Errors (3xx)
    // =================================================================
    /// Results were submitted but no game clock is running.
    #[error("TLY_ERR_300: No game in progress")]
    NoGameInProgress,

    /// A game clock is already running for this session.
    #[error("TLY_ERR_301: Game already in progress")]
    GameAlreadyInProgress,

    // =================================================================
    // Conservation Errors (4xx)
    // =================================================================
    /// The delta map does not sum to zero — a defect signal, since every
    /// transfer debits and credits the same rounded amount.
    #[error("TLY_ERR_400: Zero-sum violation: deltas sum to {sum}")]
    ZeroSumViolation { sum: Decimal },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("TLY_ERR_900: Serialization error: {0}")]
    Serialization(String),

    /// I/O error (snapshot read/write).
    #[error("TLY_ERR_901: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TallyError>;

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
