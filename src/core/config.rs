//! Game configuration.
//!
//! `GameConfig` carries the roster limits. The defaults are the standard
//! table rules (4 to 10 players, 4 pre-selected on the setup screen);
//! builder methods exist for house rules and tests.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Smallest table the game supports.
pub const MIN_PLAYERS: usize = 4;

/// Largest table the game supports.
pub const MAX_PLAYERS: usize = 10;

/// Hard cap on roster size: `PlayerId` is a `u8`.
pub const MAX_ROSTER: usize = u8::MAX as usize;

/// Roster limits and setup defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fewest players a game can be dealt for.
    pub min_players: usize,

    /// Most players a game can be dealt for.
    pub max_players: usize,

    /// Count staged on the setup screen, and restored by a reset.
    pub default_player_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            default_player_count: MIN_PLAYERS,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_range(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the count staged at setup and after a reset.
    #[must_use]
    pub fn with_default_player_count(mut self, count: usize) -> Self {
        self.default_player_count = count;
        self
    }

    /// Whether a game can be dealt for `count` players.
    #[must_use]
    pub fn allows(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }

    /// Reject `count` unless it is within the allowed range.
    pub fn check_player_count(&self, count: usize) -> Result<()> {
        if self.allows(count) {
            Ok(())
        } else {
            Err(GameError::InvalidPlayerCount {
                count,
                min: self.min_players,
                max: self.max_players,
            })
        }
    }

    /// Check the configuration is usable.
    ///
    /// Rosters are capped at `MAX_ROSTER`.
    pub fn validate(&self) -> Result<()> {
        if self.min_players == 0 {
            return Err(GameError::InvalidConfig {
                msg: "min_players must be at least 1",
            });
        }
        if self.min_players > self.max_players {
            return Err(GameError::InvalidConfig {
                msg: "min_players exceeds max_players",
            });
        }
        if self.max_players > MAX_ROSTER {
            return Err(GameError::InvalidConfig {
                msg: "at most 255 players supported",
            });
        }
        if !self.allows(self.default_player_count) {
            return Err(GameError::InvalidConfig {
                msg: "default_player_count is outside the player range",
            });
        }
        Ok(())
    }
}
