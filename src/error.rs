/// Error types for recipe-book
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.
///
/// A recipe that fails validation is not an error. See
/// [`crate::core::SubmitOutcome`] for that.

use crate::store::RecipeId;
use thiserror::Error;

/// Main error type for recipe-book operations
#[derive(Error, Debug)]
pub enum RecipeError {
    /// I/O errors (reading scripts, config files, writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No recipe with this id in the collection
    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    /// Tried to add a new recipe while an edit is open
    #[error("An edit is in progress")]
    EditInProgress,

    /// Tried to confirm an update with no edit open
    #[error("No edit in progress")]
    NotEditing,

    /// Line could not be matched to any command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command was recognised but its argument was not
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for recipe-book operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Convert RecipeError to a user-friendly error message
impl RecipeError {
    pub fn user_message(&self) -> String {
        match self {
            RecipeError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            RecipeError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            RecipeError::RecipeNotFound(id) => {
                format!("No recipe with id {}", id)
            }
            RecipeError::EditInProgress => {
                "Finish the current edit with 'update' or 'cancel' first".to_string()
            }
            RecipeError::NotEditing => {
                "Nothing to update. Start with 'edit <id>'".to_string()
            }
            RecipeError::UnknownCommand(cmd) => {
                format!("Unknown command '{}'. Type 'help' for a list", cmd)
            }
            RecipeError::InvalidArgument(reason) => {
                format!("Invalid argument: {}", reason)
            }
            RecipeError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}
