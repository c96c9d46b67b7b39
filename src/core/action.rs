//! Player actions.
//!
//! Each discrete thing a user can do on a screen is one `Action`. Renderers
//! build actions from input events and hand them to the controller, which
//! runs them through the reducer in `rules`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A user action.
///
/// ## Example
///
/// ```
/// use mr_whitey::core::{Action, PlayerId};
///
/// let start = Action::InitializeGame(6);
/// let claim = Action::UpdatePlayerName {
///     player: PlayerId::new(0),
///     name: "Alice".to_string(),
/// };
/// assert_eq!(start.name(), "initialize_game");
/// assert_eq!(claim.name(), "update_player_name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Stage a player count on the setup screen. Not range-checked.
    SetPlayerCount(usize),
    /// Deal a new game for the given number of players.
    InitializeGame(usize),
    /// A player claims a card under the given name and reads the word.
    UpdatePlayerName { player: PlayerId, name: String },
    /// Move from card picking to the discussion.
    StartDiscussion,
    /// Reveal whether a suspected player is Mr. White.
    CheckCard(PlayerId),
    /// Throw the game away and return to setup.
    ResetGame,
}

impl Action {
    /// Stable operation name, used in logs and errors.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetPlayerCount(_) => "set_player_count",
            Action::InitializeGame(_) => "initialize_game",
            Action::UpdatePlayerName { .. } => "update_player_name",
            Action::StartDiscussion => "start_discussion",
            Action::CheckCard(_) => "check_card",
            Action::ResetGame => "reset_game",
        }
    }

    /// The player this action targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<PlayerId> {
        match self {
            Action::UpdatePlayerName { player, .. } | Action::CheckCard(player) => Some(*player),
            _ => None,
        }
    }
}

/// An applied action with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Sequence number across the whole session (starts at 0). Keeps
    /// counting across resets, even though a reset drops earlier records.
    pub sequence: u64,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, sequence: u64) -> Self {
        Self { action, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names() {
        assert_eq!(Action::SetPlayerCount(5).name(), "set_player_count");
        assert_eq!(Action::StartDiscussion.name(), "start_discussion");
        assert_eq!(Action::CheckCard(PlayerId::new(1)).name(), "check_card");
        assert_eq!(Action::ResetGame.name(), "reset_game");
    }

    #[test]
    fn test_action_target() {
        let claim = Action::UpdatePlayerName {
            player: PlayerId::new(2),
            name: "Dana".to_string(),
        };

        assert_eq!(claim.target(), Some(PlayerId::new(2)));
        assert_eq!(Action::CheckCard(PlayerId::new(4)).target(), Some(PlayerId::new(4)));
        assert_eq!(Action::InitializeGame(4).target(), None);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::CheckCard(PlayerId::new(3)), 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
        assert_eq!(deserialized.sequence, 7);
    }
}
