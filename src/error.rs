//! Error types for Blank & Spy

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid game config: {0}")]
    InvalidConfig(String),

    #[error("Word catalog is empty")]
    EmptyCatalog,

    #[error("No active game session")]
    NoActiveSession,

    #[error("Player index {index} out of range (player count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid catalog format: {0}")]
    CatalogFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
