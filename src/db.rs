use crate::error::{Error, Result};
use serde_derive::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination value that selects standard output.
pub const STDOUT: &str = "-";

/// One entry of a clang compilation database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationRecord {
    /// Working directory of the compiler invocation.
    pub directory: String,
    /// Main source file, as written in the command.
    pub file: String,
    /// The compiler invocation.
    pub command: String,
}

/// Where a compilation database is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl From<&str> for Destination {
    fn from(s: &str) -> Destination {
        if s == STDOUT {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A compilation database, `compile_commands.json`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Database {
    pub records: Vec<CompilationRecord>,
}

impl Database {
    pub fn new(records: Vec<CompilationRecord>) -> Database {
        Database { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Emit this database as indented JSON with a trailing newline.
    pub fn emit(&self) -> Result<String> {
        let mut s = serde_json::to_string_pretty(&self.records)?;
        s.push('\n');
        Ok(s)
    }

    /// Emit this database to `dest`. Parent directories must already exist.
    pub fn emit_to(&self, dest: &Destination) -> Result<()> {
        let out = self.emit()?;
        match dest {
            Destination::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(out.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| Error::io(Path::new(STDOUT), e))
            }
            Destination::File(path) => {
                std::fs::write(path, out).map_err(|e| Error::io(path, e))
            }
        }
    }
}
