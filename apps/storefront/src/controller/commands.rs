//! Commands typed at the storefront prompt.

use thiserror::Error;

pub const HELP_TEXT: &str = "\
commands:
  category <name>      show one category (`all` shows everything)
  categories           list the categories of the loaded catalog
  sort <low|high|none> order the catalog by price
  search [text]        search product titles
  theme                toggle dark/light mode
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorefrontCommand {
    Category(String),
    ListCategories,
    Sort(String),
    Search(String),
    ToggleTheme,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("`{0}` needs an argument; type `help` for usage")]
    MissingArgument(&'static str),
    #[error("unknown command `{0}`; type `help` for usage")]
    Unknown(String),
}

/// The argument is the rest of the line after the first word, so category
/// names containing spaces work unquoted.
pub fn parse_command(line: &str) -> Result<StorefrontCommand, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "category" | "cat" => required(rest, "category").map(StorefrontCommand::Category),
        "categories" => Ok(StorefrontCommand::ListCategories),
        "sort" => required(rest, "sort").map(StorefrontCommand::Sort),
        "search" | "find" => Ok(StorefrontCommand::Search(rest.to_string())),
        "theme" => Ok(StorefrontCommand::ToggleTheme),
        "help" | "?" => Ok(StorefrontCommand::Help),
        "quit" | "exit" => Ok(StorefrontCommand::Quit),
        _ => Err(CommandError::Unknown(word.to_string())),
    }
}

fn required(rest: &str, command: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest.to_string())
    }
}
