// Form state for the recipe editor
//
// Holds whatever the user has typed so far plus which recipe, if any, is
// being edited. None of this touches the collection.

use crate::store::{Recipe, RecipeDraft, RecipeId};
use regex::Regex;
use std::sync::OnceLock;

// Commas are what people type. Semicolons and newlines show up in pasted lists.
const INGREDIENT_SEPARATOR: &str = r"[,;\n]";

fn ingredient_separator() -> Option<&'static Regex> {
    static SEPARATOR: OnceLock<Option<Regex>> = OnceLock::new();
    SEPARATOR
        .get_or_init(|| Regex::new(INGREDIENT_SEPARATOR).ok())
        .as_ref()
}

/// Whether the form is filling a new recipe or replacing an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing(RecipeId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    edit: EditState,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Id of the recipe under edit, if any
    pub fn editing(&self) -> Option<RecipeId> {
        match self.edit {
            EditState::Editing(id) => Some(id),
            EditState::Idle => None,
        }
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_instructions(&mut self, instructions: &str) {
        self.instructions = instructions.to_string();
    }

    /// Replace the ingredient list from free text
    ///
    /// Tokens are trimmed and empty ones dropped, so `"flour, , salt"`
    /// gives two ingredients and `""` gives none.
    pub fn set_ingredients_text(&mut self, text: &str) {
        let tokens: Vec<&str> = match ingredient_separator() {
            Some(separator) => separator.split(text).collect(),
            None => text.split(',').collect(),
        };

        self.ingredients = tokens
            .into_iter()
            .map(str::trim)
            // Blank tokens are dropped, so " , " is no ingredients at all
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
    }

    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(", ")
    }

    /// Copy a stored recipe into the form and start editing it
    pub fn load(&mut self, recipe: &Recipe) {
        self.name = recipe.name.clone();
        self.ingredients = recipe.ingredients.clone();
        self.instructions = recipe.instructions.clone();
        self.edit = EditState::Editing(recipe.id);
    }

    /// Empty the fields. Edit state is left alone.
    pub fn clear(&mut self) {
        self.name.clear();
        self.ingredients.clear();
        self.instructions.clear();
    }

    /// Empty the fields and go back to idle
    pub fn reset(&mut self) {
        self.clear();
        self.edit = EditState::Idle;
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.ingredients.is_empty() && self.instructions.is_empty()
    }

    pub fn draft(&self) -> RecipeDraft {
        RecipeDraft {
            name: self.name.clone(),
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredients_split_and_trim() {
        let mut form = FormState::new();
        form.set_ingredients_text("  water ,salt,  black pepper ");
        assert_eq!(form.ingredients, vec!["water", "salt", "black pepper"]);
        assert_eq!(form.ingredients_text(), "water, salt, black pepper");
    }

    #[test]
    fn test_ingredients_drop_empty_tokens() {
        let mut form = FormState::new();
        form.set_ingredients_text("flour, , salt,");
        assert_eq!(form.ingredients, vec!["flour", "salt"]);

        form.set_ingredients_text("");
        assert!(form.ingredients.is_empty());

        form.set_ingredients_text(" , ");
        assert!(form.ingredients.is_empty());
    }

    #[test]
    fn test_ingredients_other_separators() {
        let mut form = FormState::new();
        form.set_ingredients_text("eggs; milk\nbutter");
        assert_eq!(form.ingredients, vec!["eggs", "milk", "butter"]);
    }

    #[test]
    fn test_load_enters_editing() {
        let recipe = Recipe {
            id: 9,
            name: "Bread".to_string(),
            ingredients: vec!["flour".to_string()],
            instructions: "Bake".to_string(),
        };
        let mut form = FormState::new();
        form.load(&recipe);

        assert_eq!(form.edit_state(), EditState::Editing(9));
        assert_eq!(form.editing(), Some(9));
        assert_eq!(form.name, "Bread");
        assert_eq!(form.draft(), RecipeDraft::from(&recipe));
    }

    #[test]
    fn test_clear_keeps_edit_state_reset_does_not() {
        let mut form = FormState::new();
        form.load(&Recipe {
            id: 3,
            name: "Soup".to_string(),
            ingredients: vec!["water".to_string()],
            instructions: "Boil".to_string(),
        });

        form.clear();
        assert!(form.is_blank());
        assert_eq!(form.editing(), Some(3));

        form.reset();
        assert_eq!(form.edit_state(), EditState::Idle);
    }
}
