use std::num::ParseIntError;

use thiserror::Error;

/// Why a command line could not be understood.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("`{0}` is missing its parentheses")]
    MissingParen(String),
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` takes {expected} argument(s), got {found}")]
    Arity {
        command: &'static str,
        expected: &'static str,
        found: usize,
    },
    #[error("`{arg}` is not an integer key")]
    InvalidKey {
        arg: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
}
