use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::{debug, warn};

use crate::{Command, Error, Key, Tree};

/// Written in place of any result when the command file cannot be opened.
pub const MISSING_INPUT: &str = "There is no input file provided";

/// What a search command prints. Both shapes print `NULL` when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Found(Option<Key>),
    Range(Vec<Key>),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Found(Some(key)) => write!(f, "{key}"),
            Reply::Found(None) => f.write_str("NULL"),
            Reply::Range(keys) if keys.is_empty() => f.write_str("NULL"),
            Reply::Range(keys) => {
                let mut keys = keys.iter();
                if let Some(first) = keys.next() {
                    write!(f, "{first}")?;
                }
                for key in keys {
                    write!(f, ",{key}")?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub executed: usize,
    pub skipped: usize,
}

/// Feeds commands into one [`Tree`].
#[derive(Debug, Default)]
pub struct Driver {
    tree: Tree,
    strict: bool,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// In strict mode the first malformed line aborts the run; otherwise
    /// it is logged and skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn execute(&mut self, command: Command) -> Option<Reply> {
        debug!("{command}");
        match command {
            Command::Initialize => {
                self.tree.clear();
                None
            }
            Command::Insert(key) => {
                self.tree.insert(key);
                None
            }
            Command::Delete(key) => {
                self.tree.delete(key);
                None
            }
            Command::Search(key) => Some(Reply::Found(self.tree.search_exact(key))),
            Command::SearchRange(lo, hi) => Some(Reply::Range(self.tree.search_range(lo, hi))),
        }
    }

    /// Runs every line of `input`, writing one line to `output` per search.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<Summary, Error> {
        let mut summary = Summary::default();
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(source) if self.strict => {
                    output.flush()?;
                    return Err(Error::Parse {
                        line: index + 1,
                        source,
                    });
                }
                Err(err) => {
                    warn!("line {}: {err}, skipping", index + 1);
                    summary.skipped += 1;
                    continue;
                }
            };
            if let Some(reply) = self.execute(command) {
                writeln!(output, "{reply}")?;
            }
            summary.executed += 1;
        }
        output.flush()?;
        Ok(summary)
    }

    /// Like [`Self::run`], but reads from `path`. A file that cannot be
    /// opened yields the [`MISSING_INPUT`] line and runs nothing.
    pub fn run_file<W: Write>(&mut self, path: &Path, mut output: W) -> Result<Summary, Error> {
        match File::open(path) {
            Ok(file) => self.run(BufReader::new(file), output),
            Err(err) => {
                warn!("cannot open {}: {err}", path.display());
                writeln!(output, "{MISSING_INPUT}")?;
                output.flush()?;
                Ok(Summary::default())
            }
        }
    }
}
