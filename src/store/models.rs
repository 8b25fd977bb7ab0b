/// Data models for recipe entities
///
/// `Recipe` is the shape any export or transport has to carry faithfully:
/// id, name, ingredients, instructions.

use serde::{Deserialize, Serialize};

/// Numeric recipe identifier
pub type RecipeId = i64;

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl Recipe {
    /// Ingredients joined the way the list shows them
    pub fn ingredients_line(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// A recipe that has not been given an id yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl RecipeDraft {
    /// Check the draft is complete enough to store
    ///
    /// Checks run in field order and the first failure wins. Whitespace-only
    /// name or instructions count as empty; this is stricter than a plain
    /// emptiness check on purpose.
    pub fn validate(&self) -> Result<(), RejectReason> {
        if self.name.trim().is_empty() {
            return Err(RejectReason::MissingName);
        }
        if self.ingredients.is_empty() {
            return Err(RejectReason::MissingIngredients);
        }
        if self.instructions.trim().is_empty() {
            return Err(RejectReason::MissingInstructions);
        }
        Ok(())
    }

    /// Attach an id, turning the draft into a stored record
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

impl From<&Recipe> for RecipeDraft {
    fn from(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Why a draft was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    MissingName,
    MissingIngredients,
    MissingInstructions,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RejectReason::MissingName => "recipe name is empty",
            RejectReason::MissingIngredients => "ingredient list is empty",
            RejectReason::MissingInstructions => "instructions are empty",
        };
        write!(f, "{}", s)
    }
}
