use regex::Regex;
use std::sync::LazyLock;

static ENTER_DIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*(?:make|ninja)(?:\[\d+\])?: Entering directory [`'"](?P<dir>.*)[`'"]\s*$"#,
    )
    .unwrap()
});

static LEAVE_DIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:make|ninja)(?:\[\d+\])?: Leaving directory .*$").unwrap()
});

/// A directory announcement printed by a recursive make or ninja.
#[derive(Debug, PartialEq, Eq)]
pub enum Announcement<'a> {
    /// `make[N]: Entering directory '<dir>'`
    Enter(&'a str),
    /// `make[N]: Leaving directory ...`
    Leave,
}

impl<'a> Announcement<'a> {
    /// Classify a trimmed line as a directory announcement, if it is one.
    pub fn parse(line: &'a str) -> Option<Announcement<'a>> {
        if let Some(caps) = ENTER_DIR.captures(line) {
            let dir = caps.name("dir").map_or("", |m| m.as_str());
            return Some(Announcement::Enter(dir));
        }
        if LEAVE_DIR.is_match(line) {
            return Some(Announcement::Leave);
        }
        None
    }
}

/// Working directories inferred from nested build tool announcements.
///
/// `current` is not a view of the top of the stack: a leave that empties the
/// stack keeps the last directory as current.
#[derive(Debug, Default)]
pub struct DirectoryStack {
    stack: Vec<String>,
    current: Option<String>,
}

impl DirectoryStack {
    pub fn new() -> DirectoryStack {
        DirectoryStack::default()
    }

    /// Apply an announcement to the stack.
    pub fn apply(&mut self, announcement: &Announcement) {
        match announcement {
            Announcement::Enter(dir) => self.enter(dir),
            Announcement::Leave => self.leave(),
        }
    }

    /// Push a directory; it becomes current.
    pub fn enter(&mut self, dir: &str) {
        self.stack.push(dir.to_owned());
        self.current = Some(dir.to_owned());
    }

    /// Pop the top directory. Popping an empty stack does nothing.
    pub fn leave(&mut self) {
        self.stack.pop();
        if let Some(top) = self.stack.last() {
            self.current = Some(top.clone());
        }
    }

    /// The directory in effect. An empty announced directory counts as none.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref().filter(|dir| !dir.is_empty())
    }

    /// The current directory, pushing `fallback` first if there is none.
    pub fn current_or_insert(&mut self, fallback: &str) -> &str {
        if self.current().is_none() {
            self.enter(fallback);
        }
        self.current.as_deref().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
