//! Turn/reveal state machine for one game

use crate::core::{GameConfig, Role, RoleAssignment};
use crate::game::assign;
use crate::loader::WordCatalog;
use crate::{GameError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// State for one game at the table
///
/// Owns the immutable role assignment plus the two pieces of turn state:
/// whose turn it is and whether that player's word is currently visible.
/// Only one player's information can ever be shown at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    assignment: RoleAssignment,
    current_turn: usize,
    revealed: bool,
}

impl GameSession {
    /// Deal a new game and start at the first seat, word hidden
    pub fn start(
        config: &GameConfig,
        catalog: &WordCatalog,
        rng: &mut impl Rng,
    ) -> Result<Self> {
        let assignment = assign(config, catalog, rng)?;
        Ok(GameSession {
            assignment,
            current_turn: 0,
            revealed: false,
        })
    }

    /// Seat index of the active player
    pub fn current_turn(&self) -> usize {
        self.current_turn
    }

    /// Is the active player's word currently visible?
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Number of players in this game
    pub fn player_count(&self) -> usize {
        self.assignment.len()
    }

    /// Role of the active player
    pub fn current_role(&self) -> &Role {
        // current_turn is kept in range by advance()
        self.assignment
            .get(self.current_turn)
            .expect("current_turn in range")
    }

    /// Show the active player's word. No-op if already shown.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Pass to the next seat, wrapping after the last player
    ///
    /// Always hides the word again, even when the current player never
    /// revealed it; visibility never carries over between turns.
    pub fn advance(&mut self) {
        self.current_turn = (self.current_turn + 1) % self.assignment.len();
        self.revealed = false;
    }

    /// Host override: expose any seat's role out of turn
    ///
    /// This deliberately bypasses the "only the active player's information
    /// is visible" guarantee — it backs the table's elimination ("kill")
    /// step. Pure query: turn state and visibility are untouched.
    pub fn inspect(&self, player_index: usize) -> Result<&Role> {
        self.assignment
            .get(player_index)
            .ok_or(GameError::IndexOutOfRange {
                index: player_index,
                len: self.assignment.len(),
            })
    }
}
