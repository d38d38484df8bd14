//! Game configuration and its validation

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};

/// Player-count configuration for one game
///
/// Collected once from the host before role assignment. The presentation
/// layer is expected to pre-validate these numbers, but the engine defends
/// the invariants independently and never clamps or coerces bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Total players at the table
    pub total_players: usize,

    /// Players who receive no word at all ("Innocent Civilians")
    pub num_blanks: usize,

    /// Players who receive the odd word
    pub num_spies: usize,
}

impl GameConfig {
    /// Minimum viable table size
    pub const MIN_PLAYERS: usize = 3;

    /// Create a validated configuration
    pub fn new(total_players: usize, num_blanks: usize, num_spies: usize) -> Result<Self> {
        let config = GameConfig {
            total_players,
            num_blanks,
            num_spies,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the arithmetic invariants
    ///
    /// A game with zero Normal players is rejected as degenerate: nobody
    /// would hold the common word the spies are trying to deduce.
    pub fn validate(&self) -> Result<()> {
        if self.total_players < Self::MIN_PLAYERS {
            return Err(GameError::InvalidConfig(format!(
                "need at least {} players, got {}",
                Self::MIN_PLAYERS,
                self.total_players
            )));
        }
        if self.num_blanks < 1 {
            return Err(GameError::InvalidConfig(
                "need at least 1 Innocent Civilian".to_string(),
            ));
        }
        if self.num_spies < 1 {
            return Err(GameError::InvalidConfig(
                "need at least 1 Spy".to_string(),
            ));
        }
        if self.num_blanks + self.num_spies >= self.total_players {
            return Err(GameError::InvalidConfig(format!(
                "{} Innocent Civilians + {} Spies leave no Civilian among {} players",
                self.num_blanks, self.num_spies, self.total_players
            )));
        }
        Ok(())
    }

    /// Players holding the common word
    pub fn num_normals(&self) -> usize {
        self.total_players - self.num_blanks - self.num_spies
    }
}
