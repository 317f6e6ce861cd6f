use std::{fmt, str::FromStr};

use crate::{Key, ParseError};

/// One line of the command language, e.g. `Insert(5)` or `Search(1,10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Initialize,
    Insert(Key),
    Delete(Key),
    Search(Key),
    SearchRange(Key, Key),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let missing_paren = || ParseError::MissingParen(line.to_string());
        let (name, rest) = line.split_once('(').ok_or_else(missing_paren)?;
        let (args, _) = rest.split_once(')').ok_or_else(missing_paren)?;
        let args: Vec<&str> = if args.trim().is_empty() {
            Vec::new()
        } else {
            args.split(',').map(str::trim).collect()
        };

        let arity = |command: &'static str, expected: &'static str| ParseError::Arity {
            command,
            expected,
            found: args.len(),
        };
        match (name.trim(), args.as_slice()) {
            ("Initialize", []) => Ok(Command::Initialize),
            ("Initialize", _) => Err(arity("Initialize", "0")),
            ("Insert", [key]) => Ok(Command::Insert(parse_key(key)?)),
            ("Insert", _) => Err(arity("Insert", "1")),
            ("Delete", [key]) => Ok(Command::Delete(parse_key(key)?)),
            ("Delete", _) => Err(arity("Delete", "1")),
            ("Search", [key]) => Ok(Command::Search(parse_key(key)?)),
            ("Search", [lo, hi]) => Ok(Command::SearchRange(parse_key(lo)?, parse_key(hi)?)),
            ("Search", _) => Err(arity("Search", "1 or 2")),
            (other, _) => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_key(arg: &str) -> Result<Key, ParseError> {
    arg.parse().map_err(|source| ParseError::InvalidKey {
        arg: arg.to_string(),
        source,
    })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Initialize => f.write_str("Initialize()"),
            Command::Insert(key) => write!(f, "Insert({key})"),
            Command::Delete(key) => write!(f, "Delete({key})"),
            Command::Search(key) => write!(f, "Search({key})"),
            Command::SearchRange(lo, hi) => write!(f, "Search({lo},{hi})"),
        }
    }
}
