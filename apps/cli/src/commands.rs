//! Line commands understood by the interactive session.

use std::str::FromStr;
use thiserror::Error;

use networth_core::errors::ValidationError;
use networth_core::{ItemId, ItemKind, ReportFormat};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid item id")]
    InvalidId(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(ItemKind),
    Remove(ItemKind, ItemId),
    SetName(ItemKind, ItemId, String),
    SetValue(ItemKind, ItemId, String),
    SetCategory(ItemKind, ItemId, String),
    Categories(ItemKind),
    List,
    Overview,
    Summary,
    Export(Option<ReportFormat>),
    Help,
    Quit,
    /// Blank input line
    Nothing,
}

pub const HELP: &str = "\
Commands:
  add <asset|liability>                 add a blank item
  rm <asset|liability> <id>             remove an item
  name <asset|liability> <id> <text>    set an item's name
  value <asset|liability> <id> <amount> set an item's value
  category <asset|liability> <id> <key> set an item's category
  categories <asset|liability>          list category keys
  list                                  show every item
  overview                              show named items with totals
  summary                               show net worth and totals
  export [text|markdown|json|csv]       write the report to a file
  help                                  show this help
  quit                                  leave";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Ok(Command::Nothing);
        };
        let args: Vec<&str> = tokens.collect();

        match verb.to_ascii_lowercase().as_str() {
            "add" => match args.as_slice() {
                [kind] => Ok(Command::Add(kind.parse()?)),
                _ => Err(CommandError::Usage("add <asset|liability>")),
            },
            "rm" | "remove" => match args.as_slice() {
                [kind, id] => Ok(Command::Remove(kind.parse()?, parse_id(id)?)),
                _ => Err(CommandError::Usage("rm <asset|liability> <id>")),
            },
            "name" => match args.as_slice() {
                [kind, id, rest @ ..] => Ok(Command::SetName(
                    kind.parse()?,
                    parse_id(id)?,
                    rest.join(" "),
                )),
                _ => Err(CommandError::Usage("name <asset|liability> <id> <text>")),
            },
            "value" => match args.as_slice() {
                [kind, id, rest @ ..] => Ok(Command::SetValue(
                    kind.parse()?,
                    parse_id(id)?,
                    rest.join(" "),
                )),
                _ => Err(CommandError::Usage("value <asset|liability> <id> <amount>")),
            },
            "category" => match args.as_slice() {
                [kind, id, key] => Ok(Command::SetCategory(
                    kind.parse()?,
                    parse_id(id)?,
                    key.to_string(),
                )),
                _ => Err(CommandError::Usage("category <asset|liability> <id> <key>")),
            },
            "categories" => match args.as_slice() {
                [kind] => Ok(Command::Categories(kind.parse()?)),
                _ => Err(CommandError::Usage("categories <asset|liability>")),
            },
            "list" | "ls" => Ok(Command::List),
            "overview" => Ok(Command::Overview),
            "summary" => Ok(Command::Summary),
            "export" => match args.as_slice() {
                [] => Ok(Command::Export(None)),
                [format] => Ok(Command::Export(Some(format.parse()?))),
                _ => Err(CommandError::Usage("export [text|markdown|json|csv]")),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_id(raw: &str) -> Result<ItemId, CommandError> {
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| CommandError::InvalidId(raw.to_string()))
}
