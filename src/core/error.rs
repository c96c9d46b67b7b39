//! Error taxonomy for the game controller.
//!
//! Every failure is local and recoverable: a rejected action leaves the
//! state exactly as it was, and the renderer is expected to let the user
//! retry.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;

/// Errors raised by the reducer, the controller and the word catalog.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player count {count} is outside the allowed range {min}..={max}")]
    InvalidPlayerCount {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("{0} is not in the current roster")]
    PlayerNotFound(PlayerId),

    #[error("{0:?} is not a valid player id (expected `player-<n>`)")]
    InvalidPlayerId(String),

    #[error("cannot start the discussion: {} card(s) not claimed yet", .unclaimed.len())]
    NotAllCardsClaimed { unclaimed: Vec<PlayerId> },

    #[error("{action} is not allowed during {actual} (expected {expected})")]
    WrongPhase {
        action: &'static str,
        expected: Phase,
        actual: Phase,
    },

    #[error("word catalog has no pairs")]
    EmptyCatalog,

    #[error("word pair ({normal:?}, {mr_white:?}) must hold two different words")]
    InvalidWordPair { normal: String, mr_white: String },

    #[error("invalid game config: {msg}")]
    InvalidConfig { msg: &'static str },

    #[error("failed to parse word catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("failed to encode or decode state snapshot: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidPlayerCount {
            count: 3,
            min: 4,
            max: 10,
        };
        assert_eq!(err.to_string(), "player count 3 is outside the allowed range 4..=10");

        let err = GameError::PlayerNotFound(PlayerId::new(7));
        assert_eq!(err.to_string(), "player-7 is not in the current roster");

        let err = GameError::NotAllCardsClaimed {
            unclaimed: vec![PlayerId::new(1), PlayerId::new(3)],
        };
        assert_eq!(err.to_string(), "cannot start the discussion: 2 card(s) not claimed yet");

        let err = GameError::WrongPhase {
            action: "check_card",
            expected: Phase::Discussion,
            actual: Phase::CardPicking,
        };
        assert_eq!(
            err.to_string(),
            "check_card is not allowed during card picking (expected discussion)"
        );
    }
}
