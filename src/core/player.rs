//! Player identification and per-player records.
//!
//! ## PlayerId
//!
//! Roster slot identifier. Slots are 0-based and render as `player-<n>`,
//! which is also the form renderers pass back in when a card is tapped.
//!
//! ## Player
//!
//! One roster entry: the secret word, the Mr. White flag, and the name the
//! player typed when claiming the card.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::GameError;

const ID_PREFIX: &str = "player-";

/// Roster slot identifier.
///
/// Player indices are 0-based: the first card is `PlayerId(0)`, shown to
/// users as "Card 1".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The 1-based card number shown on the card face.
    #[must_use]
    pub const fn card_number(self) -> usize {
        self.index() + 1
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use mr_whitey::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3].to_string(), "player-3");
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

impl FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .filter(|index| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|index| index.parse::<u8>().ok())
            .map(PlayerId)
            .ok_or_else(|| GameError::InvalidPlayerId(s.to_string()))
    }
}

/// A roster entry.
///
/// `word` and `is_mr_white` are fixed when the roster is dealt. `name` and
/// `has_seen_word` change once the player claims the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    word: String,
    is_mr_white: bool,
    has_seen_word: bool,
}

impl Player {
    /// Deal a fresh, unclaimed card.
    #[must_use]
    pub fn new(id: PlayerId, word: impl Into<String>, is_mr_white: bool) -> Self {
        Self {
            id,
            name: String::new(),
            word: word.into(),
            is_mr_white,
            has_seen_word: false,
        }
    }

    /// The secret word on this card.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn is_mr_white(&self) -> bool {
        self.is_mr_white
    }

    /// Whether the player has entered a name and looked at the word.
    #[must_use]
    pub fn has_seen_word(&self) -> bool {
        self.has_seen_word
    }

    /// Record the claiming player's name and mark the word as seen.
    ///
    /// The seen flag never reverts; claiming again only replaces the name.
    pub fn claim(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.has_seen_word = true;
    }

    /// Claimed with a name that is not blank after trimming.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.has_seen_word && !self.name.trim().is_empty()
    }
}
