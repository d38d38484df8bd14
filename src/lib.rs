//! Blank & Spy - engine for the social deduction word game
//!
//! Assigns hidden roles and secret words to players around a shared device,
//! then walks the group through a strictly sequential reveal so that only the
//! active player's information is visible at any time.

pub mod core;
pub mod game;
pub mod loader;
pub mod error;

pub use error::{GameError, Result};
