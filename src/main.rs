// recipe-book - a recipe book that lives in your terminal session
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use recipe_book_lib::{
    cli::Repl, logging::init_tracing, Config, RecipeCollection, RecipeEditor, Result,
};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

fn main() {
    if let Err(e) = dispatch() {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn dispatch() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => handle_interactive(),
        Some("run") => handle_run(&args[2..]),
        Some("version" | "-v" | "--version") => {
            println!("recipe-book v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some("help" | "-h" | "--help") => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    }
}

fn setup() -> Result<(Config, RecipeEditor)> {
    let config = Config::load_default()?;
    init_tracing(&config.log_level);

    let editor = RecipeEditor::new(
        RecipeCollection::new(),
        config.id_source.build(),
        config.clear_policy,
    );
    Ok((config, editor))
}

fn handle_interactive() -> Result<()> {
    let (config, editor) = setup()?;
    tracing::info!(policy = ?config.clear_policy, "starting interactive session");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut repl = Repl::new(editor, stdin.lock(), io::stdout().lock())
        .with_search_limit(config.search_limit);

    // Piped input reads like a script, so no prompt
    if interactive {
        println!("recipe-book v{} - type 'help' for commands", env!("CARGO_PKG_VERSION"));
        repl = repl.with_prompt(config.prompt.clone());
    }

    repl.run()
}

fn handle_run(args: &[String]) -> Result<()> {
    let path = match args.first() {
        Some(path) => path,
        None => {
            eprintln!("Error: No script file provided");
            return Ok(());
        }
    };

    let (config, editor) = setup()?;
    tracing::info!(script = %path, "running script");

    let file = BufReader::new(File::open(path)?);
    let mut repl = Repl::new(editor, file, io::stdout().lock())
        .with_search_limit(config.search_limit);
    repl.run()
}

fn print_usage() {
    println!(
        r#"recipe-book v{} - Your recipes, one session at a time

USAGE:
    recipe-book                Start an interactive session
    recipe-book run <file>     Run commands from a file
    recipe-book version        Show version
    recipe-book help           Show this help

Inside a session, type 'help' for the list of commands.

EXAMPLE SESSION:
    name Soup
    ingredients water, salt
    instructions Boil
    add
    list

CONFIG:
    Read from $RECIPE_BOOK_CONFIG, or <config dir>/recipe-book/config.json.
    Nothing is saved when the session ends.
"#,
        env!("CARGO_PKG_VERSION")
    );
}
