use thiserror::Error;

use crate::config::ConfigError;
use crate::entity::EntityId;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("No saved board state is available")]
    NoSnapshotAvailable,

    #[error("Unknown formation: {0}")]
    UnknownFormation(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Rename rejected: label is empty")]
    EmptyRename,

    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityId),

    #[error("Entity {0} is not a player")]
    NotAPlayer(EntityId),

    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BoardError {
    /// Conditions the user must see. Everything else resolves silently.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, BoardError::NoSnapshotAvailable)
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
