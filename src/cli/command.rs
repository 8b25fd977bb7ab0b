// Parses one line of input into a command
//
// The first word picks the command, the rest of the line is its argument.
// Blank lines and lines starting with '#' are skipped.

use crate::error::{RecipeError, Result};
use crate::store::RecipeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Ingredients(String),
    Instructions(String),
    Form,
    Add,
    Edit(RecipeId),
    Update,
    Cancel,
    Delete(RecipeId),
    List { json: bool },
    Show(RecipeId),
    Search(String),
    Help,
    Quit,
}

impl Command {
    /// Parse a line. `Ok(None)` means there was nothing to run.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "name" => Command::Name(rest.to_string()),
            "ingredients" => Command::Ingredients(rest.to_string()),
            "instructions" => Command::Instructions(rest.to_string()),
            "form" => Command::Form,
            "add" => Command::Add,
            "edit" => Command::Edit(parse_id(rest)?),
            "update" => Command::Update,
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(parse_id(rest)?),
            "list" | "ls" => match rest {
                "" => Command::List { json: false },
                "--json" => Command::List { json: true },
                other => {
                    return Err(RecipeError::InvalidArgument(format!(
                        "list takes no argument except --json, got '{}'",
                        other
                    )))
                }
            },
            "show" => Command::Show(parse_id(rest)?),
            "search" => {
                if rest.is_empty() {
                    return Err(RecipeError::InvalidArgument(
                        "search needs a query".to_string(),
                    ));
                }
                Command::Search(rest.to_string())
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(RecipeError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

fn parse_id(arg: &str) -> Result<RecipeId> {
    if arg.is_empty() {
        return Err(RecipeError::InvalidArgument("expected a recipe id".to_string()));
    }
    arg.parse()
        .map_err(|_| RecipeError::InvalidArgument(format!("'{}' is not a recipe id", arg)))
}
