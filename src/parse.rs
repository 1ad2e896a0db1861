use crate::command;
use crate::db::CompilationRecord;
use crate::dirstack::{Announcement, DirectoryStack};
use std::io::BufRead;

/// Directory given to compile lines seen before any directory announcement.
pub const FALLBACK_DIRECTORY: &str = "/path/to/your/project/";

/// A single pass over build tool output.
///
/// Lines are fed in order. Directory announcements update the directory
/// stack, and every line that invokes a compiler on a source file yields a
/// record.
#[derive(Debug, Default)]
pub struct Parser {
    dirs: DirectoryStack,
}

impl Parser {
    pub fn new() -> Parser {
        Parser::default()
    }

    /// Process one line of output, returning the record it produces.
    pub fn feed_line(&mut self, line: &str) -> Option<CompilationRecord> {
        let line = line.trim();

        if let Some(announcement) = Announcement::parse(line) {
            self.dirs.apply(&announcement);
            return None;
        }

        let start = command::find_compiler(line)?;
        let candidate = command::isolate(line, start);
        let file = command::find_source(candidate)?;

        let directory = self.dirs.current_or_insert(FALLBACK_DIRECTORY);
        Some(CompilationRecord {
            directory: directory.to_owned(),
            file: file.to_owned(),
            command: command::strip_chaining(candidate).to_owned(),
        })
    }

    /// Parse all lines from a reader. Carriage returns are dropped.
    pub fn parse_reader<R: BufRead>(
        &mut self,
        reader: R,
    ) -> std::io::Result<Vec<CompilationRecord>> {
        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(record) = self.feed_line(&line.replace('\r', "")) {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Current depth of the directory stack.
    pub fn depth(&self) -> usize {
        self.dirs.depth()
    }
}

/// Parse a complete build log into compilation records.
pub fn parse(output: &str) -> Vec<CompilationRecord> {
    let mut parser = Parser::new();
    output
        .replace('\r', "")
        .split('\n')
        .filter_map(|line| parser.feed_line(line))
        .collect()
}
