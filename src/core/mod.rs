//! Core game types: players, phases, configuration, RNG, actions, state, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, MAX_PLAYERS, MAX_ROSTER, MIN_PLAYERS};
pub use error::{GameError, Result};
pub use phase::Phase;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{CardView, GameState};
