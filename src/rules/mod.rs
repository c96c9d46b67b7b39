//! Game rules.
//!
//! - `engine`: the reducer that applies an `Action` to a `GameState`

pub mod engine;

pub use engine::{apply, RuleContext};
