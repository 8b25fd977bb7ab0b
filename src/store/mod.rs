/// Store module for recipe-book
///
/// Holds the recipe records in memory. Nothing here is persisted;
/// the collection lives as long as its owner does.

pub mod collection;
pub mod ids;
pub mod models;

pub use collection::RecipeCollection;
pub use ids::{IdSource, SequentialIds, TimestampIds};
pub use models::*;
