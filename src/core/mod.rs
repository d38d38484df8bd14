//! Shared data types for game setup and role assignment

pub mod config;
pub mod role;

pub use config::GameConfig;
pub use role::{PlayerSlot, Role, RoleAssignment};
