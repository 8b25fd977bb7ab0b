/// In-memory recipe collection
///
/// Keeps recipes in insertion order. The collection does not validate;
/// whoever calls `add_recipe` is expected to have checked the record.

use crate::store::{Recipe, RecipeId};

/// Ordered set of recipes, owned outright
#[derive(Debug, Clone, Default)]
pub struct RecipeCollection {
    recipes: Vec<Recipe>,
}

impl RecipeCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a recipe to the end
    pub fn add_recipe(&mut self, recipe: Recipe) {
        tracing::debug!(id = recipe.id, name = %recipe.name, "recipe added");
        self.recipes.push(recipe);
    }

    /// Remove the first recipe with this id
    ///
    /// # Returns
    /// * `Some(Recipe)` - The removed record
    /// * `None` - No such id; the collection is untouched
    pub fn remove_recipe(&mut self, id: RecipeId) -> Option<Recipe> {
        let index = self.recipes.iter().position(|r| r.id == id)?;
        let removed = self.recipes.remove(index);
        tracing::debug!(id, name = %removed.name, "recipe removed");
        Some(removed)
    }

    /// Current recipes, oldest first
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: RecipeId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
