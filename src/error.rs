//! Error types for preference persistence and level-gated actions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Browser storage is unavailable")]
    Unavailable,

    #[error("Failed to read '{key}': {message}")]
    Read { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },

    #[error("Failed to remove '{key}': {message}")]
    Remove { key: String, message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// Display text doubles as the denial message shown to the player.
    #[error("Level too low! Reach LV.{required_level} {required_title} to unlock {feature}.")]
    Locked {
        feature: &'static str,
        required_level: u32,
        required_title: &'static str,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
