//! Game phases.
//!
//! Phases only move forward, `Setup -> CardPicking -> Discussion`. The one
//! way back is an explicit reset, which returns to `Setup`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing the number of players.
    #[default]
    Setup,
    /// Players take turns claiming a card and reading their word.
    CardPicking,
    /// Players talk, then tap cards to guess Mr. White.
    Discussion,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::CardPicking => "card picking",
            Phase::Discussion => "discussion",
        };
        f.write_str(name)
    }
}
