/// Recipe editor
///
/// Sits between the form and the collection. Every add or update goes
/// through the validation gate here; the collection itself never checks.
///
/// An update is a remove followed by an add with a fresh id, so an edited
/// recipe moves to the end of the list.

use crate::core::{EditState, FormState};
use crate::error::{RecipeError, Result};
use crate::store::{IdSource, Recipe, RecipeCollection, RecipeId, RejectReason};
use serde::{Deserialize, Serialize};

/// What happens to the form when a submit is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Wipe the fields no matter what
    #[default]
    ClearAlways,
    /// Keep the fields so the user can fix them
    PreserveOnReject,
}

/// Result of an add or update attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(RecipeId),
    Updated { previous: RecipeId, id: RecipeId },
    Rejected(RejectReason),
}

pub struct RecipeEditor {
    collection: RecipeCollection,
    ids: Box<dyn IdSource>,
    form: FormState,
    policy: ClearPolicy,
}

impl RecipeEditor {
    /// Create an editor over a collection
    ///
    /// # Arguments
    /// * `collection` - Recipes to work on (may already hold records)
    /// * `ids` - Where fresh ids come from
    /// * `policy` - Form behaviour after a rejected submit
    pub fn new(collection: RecipeCollection, ids: Box<dyn IdSource>, policy: ClearPolicy) -> Self {
        Self {
            collection,
            ids,
            form: FormState::new(),
            policy,
        }
    }

    pub fn collection(&self) -> &RecipeCollection {
        &self.collection
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Store the form contents as a new recipe
    ///
    /// # Returns
    /// * `Ok(SubmitOutcome::Added(id))` - Stored at the end of the list
    /// * `Ok(SubmitOutcome::Rejected(_))` - Gate failed, collection untouched
    /// * `Err(RecipeError::EditInProgress)` - An edit is open
    pub fn add_recipe(&mut self) -> Result<SubmitOutcome> {
        if let EditState::Editing(_) = self.form.edit_state() {
            return Err(RecipeError::EditInProgress);
        }

        let draft = self.form.draft();
        if let Err(reason) = draft.validate() {
            tracing::debug!(%reason, "add rejected");
            if self.policy == ClearPolicy::ClearAlways {
                self.form.clear();
            }
            return Ok(SubmitOutcome::Rejected(reason));
        }

        let id = self.ids.next_id();
        self.collection.add_recipe(draft.into_recipe(id));
        self.form.clear();

        Ok(SubmitOutcome::Added(id))
    }

    /// Load a stored recipe into the form for editing
    ///
    /// Switching straight from one edit to another is allowed; whatever
    /// was typed for the first one is replaced.
    pub fn begin_edit(&mut self, id: RecipeId) -> Result<()> {
        let recipe = self
            .collection
            .get(id)
            .ok_or(RecipeError::RecipeNotFound(id))?;

        self.form.load(recipe);
        Ok(())
    }

    /// Replace the recipe under edit with the form contents
    ///
    /// If the original was deleted while the edit was open, the edited
    /// version is still added.
    pub fn confirm_update(&mut self) -> Result<SubmitOutcome> {
        let previous = self.form.editing().ok_or(RecipeError::NotEditing)?;

        let draft = self.form.draft();
        if let Err(reason) = draft.validate() {
            tracing::debug!(previous, %reason, "update rejected");
            if self.policy == ClearPolicy::ClearAlways {
                self.form.reset();
            }
            return Ok(SubmitOutcome::Rejected(reason));
        }

        if self.collection.remove_recipe(previous).is_none() {
            tracing::warn!(previous, "recipe under edit was already gone");
        }
        let id = self.ids.next_id();
        self.collection.add_recipe(draft.into_recipe(id));
        self.form.reset();

        tracing::debug!(previous, id, "recipe updated");
        Ok(SubmitOutcome::Updated { previous, id })
    }

    /// Drop whatever is in the form and go back to idle
    pub fn cancel_edit(&mut self) {
        self.form.reset();
    }

    /// Remove a recipe. Unknown ids are ignored.
    pub fn delete_recipe(&mut self, id: RecipeId) -> Option<Recipe> {
        self.collection.remove_recipe(id)
    }
}
