//! # mr-whitey
//!
//! Game state controller for MrWhitey, a party word-guessing game.
//!
//! Every player gets a secret word. All of them share one word except
//! Mr. White, who gets a different but related one. Players talk about their
//! word without saying it, then tap cards to find Mr. White.
//!
//! ## Design Principles
//!
//! 1. **Renderer-Agnostic**: The crate owns the rules only. Web, mobile or
//!    terminal front ends read `GameState` and dispatch `Action`s.
//!
//! 2. **Reducer Core**: Every operation is a pure `(state, action) -> state`
//!    step. A rejected action leaves the state untouched.
//!
//! 3. **Cheap Snapshots**: The roster and checked set use `im-rs` persistent
//!    structures, so each step shares structure with the previous state.
//!
//! ## Modules
//!
//! - `core`: Players, phases, configuration, RNG, actions, state, errors
//! - `words`: Word pairs and the catalog they are drawn from
//! - `rules`: The reducer
//! - `controller`: `GameController`, one method per user action

pub mod controller;
pub mod core;
pub mod rules;
pub mod words;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, CardView, GameConfig, GameError, GameRng, GameState, Phase, Player,
    PlayerId, Result,
};

pub use crate::controller::{GameController, GameControllerBuilder};

pub use crate::rules::{apply, RuleContext};

pub use crate::words::{WordCatalog, WordPair, WordPairSource};
