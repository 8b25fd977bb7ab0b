/// recipe-book library
///
/// Keeps a list of recipes in memory and lets a form add, edit and
/// delete them.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod store;

// Re-exports for convenience
pub use crate::config::Config;
pub use crate::core::{ClearPolicy, RecipeEditor, SubmitOutcome};
pub use error::{RecipeError, Result};
pub use store::{Recipe, RecipeCollection, RecipeId};
