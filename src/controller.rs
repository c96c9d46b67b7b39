//! Game State Controller.
//!
//! `GameController` owns the authoritative `GameState` for one session,
//! plus the RNG and word source the reducer needs. Each user action maps to
//! one method; every method goes through `dispatch`, which commits the
//! reducer's result only on success and appends it to the history of the
//! current game. A reset starts a new history segment.
//!
//! ## Example
//!
//! ```
//! use mr_whitey::{GameController, Phase, PlayerId};
//!
//! let mut game = GameController::builder().seed(7).build().unwrap();
//!
//! game.initialize_game(4).unwrap();
//! for (i, name) in ["Ann", "Ben", "Cal", "Dee"].into_iter().enumerate() {
//!     game.update_player_name(PlayerId::new(i as u8), name).unwrap();
//! }
//! assert!(game.can_start_game());
//!
//! game.start_discussion().unwrap();
//! assert_eq!(game.state().phase(), Phase::Discussion);
//!
//! let mr_white = game.state().mr_white().unwrap().id;
//! game.check_card(mr_white).unwrap();
//! assert!(game.is_mr_white_found());
//! ```

use im::Vector;
use tracing::warn;

use crate::core::action::{Action, ActionRecord};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::rules::{apply, RuleContext};
use crate::words::{WordCatalog, WordPairSource};

/// Owner of the game state for one running session.
pub struct GameController<S = WordCatalog> {
    state: GameState,
    rng: GameRng,
    words: S,
    history: Vector<ActionRecord>,
    next_sequence: u64,
}

impl GameController<WordCatalog> {
    /// Standard rules, builtin word table, entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: GameState::default(),
            rng: GameRng::from_entropy(),
            words: WordCatalog::builtin(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    #[must_use]
    pub fn builder() -> GameControllerBuilder<WordCatalog> {
        GameControllerBuilder::default()
    }
}

impl Default for GameController<WordCatalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WordPairSource> GameController<S> {
    /// Current state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applied actions of the current game, oldest first.
    ///
    /// A successful `ResetGame` drops the earlier records, so the history
    /// stays bounded by one game. The segment starts with that `ResetGame`
    /// record, and sequence numbers keep counting from where the previous
    /// segment stopped.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Seed of the RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn words(&self) -> &S {
        &self.words
    }

    /// Apply any action. On error the state and history are unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState> {
        let mut ctx = RuleContext::new(&mut self.rng, &self.words);
        match apply(&self.state, &action, &mut ctx) {
            Ok(next) => {
                self.state = next;
                if action == Action::ResetGame {
                    self.history.clear();
                }
                self.history.push_back(ActionRecord::new(action, self.next_sequence));
                self.next_sequence += 1;
                Ok(&self.state)
            }
            Err(err) => {
                warn!(
                    action = action.name(),
                    player = ?action.target(),
                    error = %err,
                    "action rejected"
                );
                Err(err)
            }
        }
    }

    /// Stage a player count. Out-of-range values are stored; check
    /// `GameState::is_valid_player_count` before offering to start.
    pub fn set_player_count(&mut self, count: usize) -> Result<()> {
        self.dispatch(Action::SetPlayerCount(count)).map(|_| ())
    }

    /// Deal a new game. Counts outside the configured range are rejected.
    pub fn initialize_game(&mut self, count: usize) -> Result<()> {
        self.dispatch(Action::InitializeGame(count)).map(|_| ())
    }

    /// Claim a card. The name is stored as given.
    pub fn update_player_name(&mut self, player: PlayerId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.dispatch(Action::UpdatePlayerName { player, name }).map(|_| ())
    }

    #[must_use]
    pub fn can_start_game(&self) -> bool {
        self.state.can_start_game()
    }

    pub fn start_discussion(&mut self) -> Result<()> {
        self.dispatch(Action::StartDiscussion).map(|_| ())
    }

    /// Check a suspected player. Checking twice is a no-op.
    pub fn check_card(&mut self, player: PlayerId) -> Result<()> {
        self.dispatch(Action::CheckCard(player)).map(|_| ())
    }

    #[must_use]
    pub fn is_mr_white_found(&self) -> bool {
        self.state.is_mr_white_found()
    }

    pub fn reset_game(&mut self) -> Result<()> {
        self.dispatch(Action::ResetGame).map(|_| ())
    }
}

/// Builder for `GameController`.
pub struct GameControllerBuilder<S> {
    config: GameConfig,
    seed: Option<u64>,
    words: S,
}

impl Default for GameControllerBuilder<WordCatalog> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            seed: None,
            words: WordCatalog::builtin(),
        }
    }
}

impl<S: WordPairSource> GameControllerBuilder<S> {
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed. Without one the RNG is seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the word source.
    pub fn words<T: WordPairSource>(self, words: T) -> GameControllerBuilder<T> {
        GameControllerBuilder {
            config: self.config,
            seed: self.seed,
            words,
        }
    }

    /// Validate the config and build the controller.
    pub fn build(self) -> Result<GameController<S>> {
        let state = GameState::new(self.config)?;
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Ok(GameController {
            state,
            rng,
            words: self.words,
            history: Vector::new(),
            next_sequence: 0,
        })
    }
}
