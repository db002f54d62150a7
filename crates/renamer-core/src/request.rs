use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::{RenameError, Result};

/// Which files at a directory level are selected for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchRule {
    /// No filter was given: every file is a candidate.
    EveryFile,
    /// Case-sensitive, whole-name equality. No globbing.
    Exact(String),
}

impl MatchRule {
    /// Blank filters select every file; anything else is kept verbatim.
    pub fn from_filter(filter: &str) -> Self {
        if filter.trim().is_empty() {
            MatchRule::EveryFile
        } else {
            MatchRule::Exact(filter.to_string())
        }
    }

    pub fn matches(&self, file_name: &OsStr) -> bool {
        match self {
            MatchRule::EveryFile => true,
            MatchRule::Exact(name) => file_name == OsStr::new(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenameRequest {
    root: PathBuf,
    match_rule: MatchRule,
    target_name: String,
}

impl RenameRequest {
    pub fn new(root: &Path, match_name: &str, target_name: &str) -> Result<Self> {
        if root.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(RenameError::EmptyRootPath);
        }
        if target_name.trim().is_empty() {
            return Err(RenameError::EmptyTargetName);
        }
        if target_name.contains(std::path::is_separator) || target_name == "." || target_name == ".." {
            return Err(RenameError::InvalidTargetName {
                name: target_name.to_string(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            match_rule: MatchRule::from_filter(match_name),
            target_name: target_name.to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn match_rule(&self) -> &MatchRule {
        &self.match_rule
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}
