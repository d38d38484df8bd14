//! Roles and the shuffled per-player assignment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hidden role dealt to one player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Holds the common word
    Normal { word: String },

    /// Holds the odd word and must deduce the common one
    Spy { word: String },

    /// Holds no word at all
    Blank,
}

impl Role {
    /// The secret word this role carries, if any
    pub fn word(&self) -> Option<&str> {
        match self {
            Role::Normal { word } | Role::Spy { word } => Some(word),
            Role::Blank => None,
        }
    }

    /// Bilingual label shown when a role is exposed to the table
    pub fn label(&self) -> &'static str {
        match self {
            Role::Normal { .. } => "Civilian (平民)",
            Role::Spy { .. } => "Spy (间谍)",
            Role::Blank => "Innocent Civilian (白板)",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One seat at the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSlot {
    pub role: Role,
}

/// The full shuffled deal, one slot per player
///
/// Produced once per game by the assignment engine and immutable afterwards;
/// the slot order carries no positional signal about who drew what.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    slots: Vec<PlayerSlot>,
}

impl RoleAssignment {
    pub(crate) fn new(slots: Vec<PlayerSlot>) -> Self {
        RoleAssignment { slots }
    }

    /// Number of players dealt into
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Role at a seat, if the index is in range
    pub fn get(&self, index: usize) -> Option<&Role> {
        self.slots.get(index).map(|slot| &slot.role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerSlot> {
        self.slots.iter()
    }
}
