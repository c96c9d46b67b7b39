//! Game state: the single value renderers draw from.
//!
//! ## GameState
//!
//! - Staged player count and phase
//! - The dealt roster, in card order
//! - The word pair in play
//! - Players checked during the discussion
//!
//! The state is only changed by the reducer in `rules`. Everything here is
//! read access and derived queries. Roster and checked set use `im`
//! persistent structures, so every reducer step can return a fresh state
//! while sharing the unchanged parts with the previous one.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::error::Result;
use super::phase::Phase;
use super::player::{Player, PlayerId};
use crate::words::WordPair;

/// How a renderer should draw a player's card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardView {
    /// Not claimed yet: face down, shows "Card N".
    Hidden,
    /// Claimed and not checked: shows the player's name.
    Revealed,
    /// Checked during the discussion, not Mr. White.
    Eliminated,
    /// Checked during the discussion, and it was Mr. White.
    Crowned,
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,

    /// Staged player count (setup screen), then the dealt roster size.
    pub(crate) player_count: usize,

    pub(crate) players: Vector<Player>,

    pub(crate) phase: Phase,

    pub(crate) current_word_pair: Option<WordPair>,

    pub(crate) checked_player_ids: OrdSet<PlayerId>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::setup(GameConfig::default())
    }
}

impl GameState {
    /// Create a fresh state in `Setup` with the default count staged.
    ///
    /// Rejects a config that fails `GameConfig::validate`.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::setup(config))
    }

    fn setup(config: GameConfig) -> Self {
        Self {
            player_count: config.default_player_count,
            config,
            players: Vector::new(),
            phase: Phase::Setup,
            current_word_pair: None,
            checked_player_ids: OrdSet::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The roster in card order. Empty during `Setup`.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    #[must_use]
    pub fn current_word_pair(&self) -> Option<&WordPair> {
        self.current_word_pair.as_ref()
    }

    #[must_use]
    pub fn checked_player_ids(&self) -> &OrdSet<PlayerId> {
        &self.checked_player_ids
    }

    /// Whether the staged count may be dealt.
    #[must_use]
    pub fn is_valid_player_count(&self) -> bool {
        self.config.allows(self.player_count)
    }

    // === Roster lookups ===

    /// Look up a player in the current roster.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index()).filter(|p| p.id == id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.get_mut(id.index()).filter(|p| p.id == id)
    }

    #[must_use]
    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.player(id).is_some()
    }

    /// The player holding Mr. White's word.
    #[must_use]
    pub fn mr_white(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.is_mr_white())
    }

    /// 1-based number printed on a player's card.
    #[must_use]
    pub fn card_number(&self, id: PlayerId) -> Option<usize> {
        self.player(id).map(|p| p.id.card_number())
    }

    // === Card picking ===

    /// Players who have claimed their card, in card order.
    pub fn claimed_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.has_seen_word())
    }

    /// Players who still have to claim a card or enter a usable name.
    #[must_use]
    pub fn unclaimed_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !p.is_ready())
            .map(|p| p.id)
            .collect()
    }

    /// True iff there is a roster and every player has seen their word
    /// under a name that is not blank after trimming.
    #[must_use]
    pub fn can_start_game(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(Player::is_ready)
    }

    // === Discussion ===

    #[must_use]
    pub fn is_checked(&self, id: PlayerId) -> bool {
        self.checked_player_ids.contains(&id)
    }

    /// Players not checked yet, in card order.
    pub fn remaining_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| !self.is_checked(p.id))
    }

    /// Players already checked, in card order.
    pub fn checked_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| self.is_checked(p.id))
    }

    /// True iff Mr. White has been checked.
    #[must_use]
    pub fn is_mr_white_found(&self) -> bool {
        self.mr_white().is_some_and(|p| self.is_checked(p.id))
    }

    /// How the renderer should draw a card.
    #[must_use]
    pub fn card_view(&self, id: PlayerId) -> Option<CardView> {
        let player = self.player(id)?;
        let view = match (player.has_seen_word(), self.is_checked(id)) {
            (_, true) if player.is_mr_white() => CardView::Crowned,
            (_, true) => CardView::Eliminated,
            (true, false) => CardView::Revealed,
            (false, false) => CardView::Hidden,
        };
        Some(view)
    }

    // === Snapshots ===

    /// Encode the state as a compact in-memory snapshot.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::GameError;

    fn dealt(count: u8, mr_white: u8) -> GameState {
        let pair = WordPair::new("Coffee", "Tea");
        let mut state = GameState::default();
        state.player_count = count as usize;
        state.players = (0..count)
            .map(|i| Player::new(PlayerId::new(i), pair.word_for(i == mr_white), i == mr_white))
            .collect();
        state.current_word_pair = Some(pair);
        state.phase = Phase::CardPicking;
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::default();

        assert_eq!(state.phase(), Phase::Setup);
        assert_eq!(state.player_count(), 4);
        assert!(state.players().is_empty());
        assert!(state.current_word_pair().is_none());
        assert!(state.checked_player_ids().is_empty());
        assert!(state.is_valid_player_count());
    }

    #[test]
    fn test_new_validates_config() {
        let config = GameConfig::new().with_default_player_count(6);
        let state = GameState::new(config).unwrap();
        assert_eq!(state.player_count(), 6);

        for config in [
            GameConfig::new().with_player_range(0, 10),
            GameConfig::new().with_player_range(4, 300),
            GameConfig::new().with_player_range(8, 4),
        ] {
            assert!(matches!(
                GameState::new(config),
                Err(GameError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_empty_roster_cannot_start() {
        let state = GameState::default();
        assert!(!state.can_start_game());
        assert!(!state.is_mr_white_found());
        assert!(state.mr_white().is_none());
    }

    #[test]
    fn test_player_lookup() {
        let state = dealt(5, 2);

        assert_eq!(state.player(PlayerId::new(3)).map(|p| p.id), Some(PlayerId::new(3)));
        assert!(state.player(PlayerId::new(5)).is_none());
        assert!(state.contains_player(PlayerId::new(0)));
        assert_eq!(state.card_number(PlayerId::new(4)), Some(5));
        assert_eq!(state.mr_white().map(|p| p.id), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_can_start_requires_all_ready() {
        let mut state = dealt(4, 0);

        for id in PlayerId::all(3) {
            state.player_mut(id).unwrap().claim("Someone");
        }
        assert!(!state.can_start_game());
        assert_eq!(state.unclaimed_players(), vec![PlayerId::new(3)]);

        state.player_mut(PlayerId::new(3)).unwrap().claim("  \t");
        assert!(!state.can_start_game());

        state.player_mut(PlayerId::new(3)).unwrap().claim("Last");
        assert!(state.can_start_game());
        assert!(state.unclaimed_players().is_empty());
        assert_eq!(state.claimed_players().count(), 4);
    }

    #[test]
    fn test_card_views() {
        let mut state = dealt(4, 1);
        state.player_mut(PlayerId::new(0)).unwrap().claim("Ann");
        state.player_mut(PlayerId::new(1)).unwrap().claim("Ben");
        state.checked_player_ids.insert(PlayerId::new(0));
        state.checked_player_ids.insert(PlayerId::new(1));

        assert_eq!(state.card_view(PlayerId::new(0)), Some(CardView::Eliminated));
        assert_eq!(state.card_view(PlayerId::new(1)), Some(CardView::Crowned));
        assert_eq!(state.card_view(PlayerId::new(2)), Some(CardView::Hidden));
        assert_eq!(state.card_view(PlayerId::new(9)), None);

        state.player_mut(PlayerId::new(2)).unwrap().claim("Cal");
        assert_eq!(state.card_view(PlayerId::new(2)), Some(CardView::Revealed));
    }

    #[test]
    fn test_remaining_and_checked() {
        let mut state = dealt(5, 4);
        state.checked_player_ids.insert(PlayerId::new(3));
        state.checked_player_ids.insert(PlayerId::new(1));

        let remaining: Vec<_> = state.remaining_players().map(|p| p.id).collect();
        let checked: Vec<_> = state.checked_players().map(|p| p.id).collect();

        assert_eq!(remaining, vec![PlayerId::new(0), PlayerId::new(2), PlayerId::new(4)]);
        assert_eq!(checked, vec![PlayerId::new(1), PlayerId::new(3)]);
        assert!(!state.is_mr_white_found());

        state.checked_player_ids.insert(PlayerId::new(4));
        assert!(state.is_mr_white_found());
    }

    #[test]
    fn test_staged_count_validity() {
        let mut state = GameState::default();

        state.player_count = 3;
        assert!(!state.is_valid_player_count());
        state.player_count = 10;
        assert!(state.is_valid_player_count());
        state.player_count = 11;
        assert!(!state.is_valid_player_count());
    }

    #[test]
    fn test_snapshot_bytes() {
        let mut state = dealt(6, 3);
        state.player_mut(PlayerId::new(0)).unwrap().claim("Ann");

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        assert!(GameState::from_bytes(&[0xff, 0x01]).is_err());
    }

    #[test]
    fn test_state_json() {
        let state = dealt(4, 0);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
