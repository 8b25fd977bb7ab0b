// Text output for the interactive surface

use crate::core::{EditState, FormState, SearchResult, SubmitOutcome};
use crate::error::Result;
use crate::store::Recipe;
use std::io::Write;

const RULE_WIDTH: usize = 60;

pub fn recipe_list<W: Write>(out: &mut W, recipes: &[Recipe]) -> Result<()> {
    if recipes.is_empty() {
        writeln!(out, "No recipes yet.")?;
        return Ok(());
    }

    writeln!(out, "\nRecipe Book ({})", recipes.len())?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for recipe in recipes {
        writeln!(out, "[{}] {}", recipe.id, recipe.name)?;
        writeln!(out, "     Ingredients: {}", recipe.ingredients_line())?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

pub fn recipe_json<W: Write>(out: &mut W, recipes: &[Recipe]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, recipes)?;
    writeln!(out)?;
    Ok(())
}

pub fn recipe_detail<W: Write>(out: &mut W, recipe: &Recipe) -> Result<()> {
    writeln!(out, "\n[{}] {}", recipe.id, recipe.name)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "Ingredients:")?;
    for ingredient in &recipe.ingredients {
        writeln!(out, "  - {}", ingredient)?;
    }
    writeln!(out, "Instructions:")?;
    for line in recipe.instructions.lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

pub fn form<W: Write>(out: &mut W, form: &FormState) -> Result<()> {
    match form.edit_state() {
        EditState::Idle => writeln!(out, "New recipe")?,
        EditState::Editing(id) => writeln!(out, "Editing recipe {}", id)?,
    }
    writeln!(out, "  Name:         {}", form.name)?;
    writeln!(out, "  Ingredients:  {}", form.ingredients_text())?;
    writeln!(out, "  Instructions: {}", form.instructions)?;
    Ok(())
}

pub fn outcome<W: Write>(out: &mut W, outcome: &SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Added(id) => writeln!(out, "Added recipe {}", id)?,
        SubmitOutcome::Updated { previous, id } => {
            writeln!(out, "Updated recipe {} (now {})", previous, id)?
        }
        SubmitOutcome::Rejected(reason) => writeln!(out, "Not saved: {}", reason)?,
    }
    Ok(())
}

pub fn search_results<W: Write>(out: &mut W, query: &str, results: &[SearchResult]) -> Result<()> {
    if results.is_empty() {
        writeln!(out, "No recipes found matching '{}'", query)?;
        return Ok(());
    }

    writeln!(out, "\nFound {} recipe(s) matching '{}':", results.len(), query)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for (i, result) in results.iter().enumerate() {
        writeln!(
            out,
            "{:3}. [{}] {} ({})",
            i + 1,
            result.recipe.id,
            result.recipe.name,
            result.recipe.ingredients_line()
        )?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    Ok(())
}

pub fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        r#"COMMANDS:
    name <text>            Set the recipe name
    ingredients <a, b>     Set the ingredients (comma separated)
    instructions <text>    Set the instructions
    form                   Show what's been entered so far
    add                    Save the form as a new recipe
    edit <id>              Load a recipe into the form
    update                 Save the form over the recipe being edited
    cancel                 Discard the form and stop editing
    delete <id>            Remove a recipe
    list [--json]          Show all recipes
    show <id>              Show one recipe in full
    search <query>         Find recipes by name or ingredient
    help                   Show this help
    quit                   Leave"#
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RejectReason;

    fn bread() -> Recipe {
        Recipe {
            id: 2,
            name: "Bread".to_string(),
            ingredients: vec!["flour".to_string(), "yeast".to_string()],
            instructions: "Knead\nBake".to_string(),
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_output() {
        let text = render(|out| recipe_list(out, &[bread()]));
        assert!(text.contains("[2] Bread"));
        assert!(text.contains("flour, yeast"));

        let text = render(|out| recipe_list(out, &[]));
        assert!(text.contains("No recipes yet."));
    }

    #[test]
    fn test_json_output_parses_back() {
        let text = render(|out| recipe_json(out, &[bread()]));
        let parsed: Vec<Recipe> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, vec![bread()]);
    }

    #[test]
    fn test_detail_splits_instructions() {
        let text = render(|out| recipe_detail(out, &bread()));
        assert!(text.contains("  - yeast"));
        assert!(text.contains("  Knead\n  Bake"));
    }

    #[test]
    fn test_outcome_messages() {
        let text = render(|out| outcome(out, &SubmitOutcome::Rejected(RejectReason::MissingName)));
        assert_eq!(text, "Not saved: recipe name is empty\n");
    }
}
