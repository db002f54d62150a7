use std::fmt;
use std::path::PathBuf;

/// One line of the rename log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A file selected by the match rule, by its original path.
    Found(PathBuf),
    /// A completed rename, by its new path.
    Renamed(PathBuf),
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Found(path) => write!(f, "Found {}", path.display()),
            LogEntry::Renamed(path) => write!(f, "Renamed to {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Discoveries and renames in traversal order.
    pub log: Vec<LogEntry>,
    /// True when any file in the subtree satisfied the match rule.
    pub matched: bool,
}

impl RenameOutcome {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Folds a subdirectory's outcome into this one. A subtree without a
    /// match never clears a match found elsewhere.
    pub fn merge(&mut self, child: RenameOutcome) {
        self.log.extend(child.log);
        self.matched |= child.matched;
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }

    pub fn found_count(&self) -> usize {
        self.log.iter().filter(|e| matches!(e, LogEntry::Found(_))).count()
    }

    pub fn renamed_count(&self) -> usize {
        self.log.iter().filter(|e| matches!(e, LogEntry::Renamed(_))).count()
    }
}
