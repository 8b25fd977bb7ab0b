/// Interactive recipe book
///
/// Reads commands line by line and applies them to a `RecipeEditor`.
/// Works over any reader/writer pair, so the same loop serves a terminal,
/// a script file, or a test buffer.

pub mod command;
pub mod render;

pub use command::Command;

use crate::core::{RecipeEditor, Searcher};
use crate::error::{RecipeError, Result};
use std::io::{BufRead, Write};

/// Whether the loop should keep going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    editor: RecipeEditor,
    searcher: Searcher,
    prompt: Option<String>,
    search_limit: usize,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(editor: RecipeEditor, input: R, output: W) -> Self {
        Self {
            input,
            output,
            editor,
            searcher: Searcher::new(),
            prompt: None,
            search_limit: 20,
        }
    }

    /// Print this before every line read. Leave unset for scripts.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn into_editor(self) -> RecipeEditor {
        self.editor
    }

    /// Run until input runs out or the user quits
    ///
    /// Command errors are printed and the loop carries on, and so does a
    /// line that isn't valid UTF-8. Only I/O failures on the streams
    /// themselves end it early.
    pub fn run(&mut self) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.output, "{}", prompt)?;
                self.output.flush()?;
            }

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => self.execute(line),
                Err(e) => Err(RecipeError::InvalidArgument(format!(
                    "line is not valid UTF-8 ({})",
                    e
                ))),
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(RecipeError::Io(e)) => return Err(RecipeError::Io(e)),
                Err(e) => {
                    tracing::debug!(error = %e, "command failed");
                    writeln!(self.output, "{}", e.user_message())?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Run a single line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = match Command::parse(line)? {
            Some(command) => command,
            None => return Ok(Flow::Continue),
        };

        match command {
            Command::Name(text) => self.editor.form_mut().set_name(&text),
            Command::Ingredients(text) => self.editor.form_mut().set_ingredients_text(&text),
            Command::Instructions(text) => self.editor.form_mut().set_instructions(&text),
            Command::Form => render::form(&mut self.output, self.editor.form())?,
            Command::Add => {
                let outcome = self.editor.add_recipe()?;
                render::outcome(&mut self.output, &outcome)?;
            }
            Command::Edit(id) => {
                self.editor.begin_edit(id)?;
                render::form(&mut self.output, self.editor.form())?;
            }
            Command::Update => {
                let outcome = self.editor.confirm_update()?;
                render::outcome(&mut self.output, &outcome)?;
            }
            Command::Cancel => {
                self.editor.cancel_edit();
                writeln!(self.output, "Form cleared")?;
            }
            Command::Delete(id) => match self.editor.delete_recipe(id) {
                Some(recipe) => writeln!(self.output, "Deleted '{}'", recipe.name)?,
                None => writeln!(self.output, "No recipe with id {}, nothing deleted", id)?,
            },
            Command::List { json: false } => {
                render::recipe_list(&mut self.output, self.editor.collection().recipes())?
            }
            Command::List { json: true } => {
                render::recipe_json(&mut self.output, self.editor.collection().recipes())?
            }
            Command::Show(id) => {
                let recipe = self
                    .editor
                    .collection()
                    .get(id)
                    .ok_or(RecipeError::RecipeNotFound(id))?;
                render::recipe_detail(&mut self.output, recipe)?;
            }
            Command::Search(query) => {
                let results =
                    self.searcher
                        .search(self.editor.collection(), &query, self.search_limit);
                render::search_results(&mut self.output, &query, &results)?;
            }
            Command::Help => render::help(&mut self.output)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
