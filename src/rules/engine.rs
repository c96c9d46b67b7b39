//! The reducer: `(state, action) -> state`.
//!
//! `apply` never mutates its input. It returns the next state on success
//! and an error otherwise, so a rejected action cannot leave a half-applied
//! state behind. Randomness and word pairs come in through `RuleContext`.

use tracing::{debug, info};

use crate::core::action::Action;
use crate::core::config::MAX_ROSTER;
use crate::core::error::{GameError, Result};
use crate::core::phase::Phase;
use crate::core::player::{Player, PlayerId};
use crate::core::rng::GameRng;
use crate::core::state::GameState;
use crate::words::WordPairSource;

/// External inputs the reducer draws on.
pub struct RuleContext<'a> {
    pub rng: &'a mut GameRng,
    pub words: &'a dyn WordPairSource,
}

impl<'a> RuleContext<'a> {
    pub fn new(rng: &'a mut GameRng, words: &'a dyn WordPairSource) -> Self {
        Self { rng, words }
    }
}

/// Apply an action, returning the next state.
pub fn apply(state: &GameState, action: &Action, ctx: &mut RuleContext<'_>) -> Result<GameState> {
    let mut next = state.clone();
    match action {
        Action::SetPlayerCount(count) => set_player_count(&mut next, *count)?,
        Action::InitializeGame(count) => initialize_game(&mut next, *count, ctx)?,
        Action::UpdatePlayerName { player, name } => update_player_name(&mut next, *player, name)?,
        Action::StartDiscussion => start_discussion(&mut next)?,
        Action::CheckCard(player) => check_card(&mut next, *player)?,
        Action::ResetGame => reset_game(&mut next),
    }
    Ok(next)
}

fn require_phase(state: &GameState, action: &'static str, expected: Phase) -> Result<()> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(GameError::WrongPhase {
            action,
            expected,
            actual: state.phase,
        })
    }
}

fn set_player_count(state: &mut GameState, count: usize) -> Result<()> {
    require_phase(state, "set_player_count", Phase::Setup)?;
    state.player_count = count;
    debug!(count, valid = state.is_valid_player_count(), "player count staged");
    Ok(())
}

fn initialize_game(state: &mut GameState, count: usize, ctx: &mut RuleContext<'_>) -> Result<()> {
    require_phase(state, "initialize_game", Phase::Setup)?;
    let config = state.config();
    config.check_player_count(count)?;
    // A restored state may carry a config that never went through `validate`.
    if count == 0 || count > MAX_ROSTER {
        return Err(GameError::InvalidPlayerCount {
            count,
            min: config.min_players.max(1),
            max: config.max_players.min(MAX_ROSTER),
        });
    }

    let pair = ctx.words.pick_random_pair(ctx.rng);
    let mr_white = ctx.rng.gen_index(count);

    state.players = PlayerId::all(count)
        .map(|id| {
            let is_mr_white = id.index() == mr_white;
            Player::new(id, pair.word_for(is_mr_white), is_mr_white)
        })
        .collect();
    state.player_count = count;
    state.current_word_pair = Some(pair);
    state.checked_player_ids.clear();
    state.phase = Phase::CardPicking;

    info!(players = count, "game dealt");
    Ok(())
}

fn update_player_name(state: &mut GameState, id: PlayerId, name: &str) -> Result<()> {
    require_phase(state, "update_player_name", Phase::CardPicking)?;
    let player = state.player_mut(id).ok_or(GameError::PlayerNotFound(id))?;
    player.claim(name);
    debug!(player = %id, player_name = name, "card claimed");
    Ok(())
}

fn start_discussion(state: &mut GameState) -> Result<()> {
    require_phase(state, "start_discussion", Phase::CardPicking)?;
    if !state.can_start_game() {
        return Err(GameError::NotAllCardsClaimed {
            unclaimed: state.unclaimed_players(),
        });
    }
    state.phase = Phase::Discussion;
    info!(players = state.players.len(), "discussion started");
    Ok(())
}

fn check_card(state: &mut GameState, id: PlayerId) -> Result<()> {
    require_phase(state, "check_card", Phase::Discussion)?;
    if !state.contains_player(id) {
        return Err(GameError::PlayerNotFound(id));
    }
    if state.checked_player_ids.insert(id).is_none() {
        debug!(player = %id, "card checked");
        if state.is_mr_white_found() {
            info!(player = %id, "mr. white found");
        }
    }
    Ok(())
}

fn reset_game(state: &mut GameState) {
    let from = state.phase;
    state.players.clear();
    state.player_count = state.config().default_player_count;
    state.checked_player_ids.clear();
    state.current_word_pair = None;
    state.phase = Phase::Setup;
    info!(%from, "game reset");
}
