/// Core functionality modules
///
/// Contains the form state, the editor that applies it to the
/// collection, and recipe searching.

pub mod editor;
pub mod form;
pub mod searcher;

pub use editor::{ClearPolicy, RecipeEditor, SubmitOutcome};
pub use form::{EditState, FormState};
pub use searcher::{SearchResult, Searcher};
