use std::fs::{self, DirEntry};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::outcome::{LogEntry, RenameOutcome};
use crate::request::RenameRequest;
use crate::{RenameError, Result};

/// Depth-first, conflict-aware renamer over a directory tree.
///
/// Each directory level is processed in enumeration order (or by file name
/// when [`Renamer::sorted`] is set): subdirectories are descended into as
/// they are met, and files selected by the match rule are renamed to the
/// target name inside their own parent unless that name is already taken.
///
/// With [`MatchRule::EveryFile`](crate::MatchRule::EveryFile) the first file
/// processed at a level takes the target name; every later file at that
/// level finds the name occupied and is only logged as found.
pub struct Renamer {
    request: RenameRequest,
    sorted: bool,
}

impl Renamer {
    pub fn new(request: RenameRequest) -> Self {
        Self {
            request,
            sorted: false,
        }
    }

    /// Process each directory's entries ordered by file name instead of the
    /// order the filesystem returns them in.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    pub fn request(&self) -> &RenameRequest {
        &self.request
    }

    pub fn run(&self) -> Result<RenameOutcome> {
        self.run_with_confirm(|_, _| Ok(true))
    }

    /// Walks the tree, asking `confirm` before each rename. Conflicting
    /// destinations are skipped before `confirm` is consulted.
    pub fn run_with_confirm<F>(&self, confirm: F) -> Result<RenameOutcome>
    where
        F: Fn(&Path, &Path) -> anyhow::Result<bool>,
    {
        let root = self.request.root();
        if !root.exists() {
            return Err(RenameError::NotFound {
                path: root.to_path_buf(),
            });
        }

        info!("Starting rename in: {:?}", root);
        info!("Match rule: {:?}", self.request.match_rule());
        info!("Target name: '{}'", self.request.target_name());

        let outcome = self.rename_recursive(root, &confirm)?;

        info!(
            "Rename complete: {} files found, {} renamed",
            outcome.found_count(),
            outcome.renamed_count()
        );

        Ok(outcome)
    }

    fn rename_recursive<F>(&self, dir: &Path, confirm: &F) -> Result<RenameOutcome>
    where
        F: Fn(&Path, &Path) -> anyhow::Result<bool>,
    {
        debug!("Processing directory: {:?}", dir);

        let mut outcome = RenameOutcome::empty();

        for entry in self.list_entries(dir)? {
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| RenameError::io(&path, e))?;

            if file_type.is_dir() {
                outcome.merge(self.rename_recursive(&path, confirm)?);
            } else if self.request.match_rule().matches(&entry.file_name()) {
                outcome.matched = true;
                outcome.log.push(LogEntry::Found(path.clone()));
                if let Some(renamed) = self.rename_file(&path, confirm)? {
                    outcome.log.push(renamed);
                }
            }
        }

        Ok(outcome)
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        if !dir.is_dir() {
            debug!("Not a directory, nothing to list: {:?}", dir);
            return Ok(Vec::new());
        }

        let read_dir = match fs::read_dir(dir) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Skipping unreadable directory {:?}: {}", dir, e);
                return Ok(Vec::new());
            }
        };

        let mut entries = read_dir
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| RenameError::io(dir, e))?;

        if self.sorted {
            entries.sort_by_key(|entry| entry.file_name());
        }

        Ok(entries)
    }

    /// Returns the log entry for a completed rename, or `None` when the
    /// destination is occupied or the rename was declined.
    fn rename_file<F>(&self, source: &Path, confirm: &F) -> Result<Option<LogEntry>>
    where
        F: Fn(&Path, &Path) -> anyhow::Result<bool>,
    {
        let Some(parent) = source.parent() else {
            return Ok(None);
        };
        let destination = parent.join(self.request.target_name());

        // symlink_metadata so a dangling link still occupies the name
        match fs::symlink_metadata(&destination) {
            Ok(_) => {
                debug!("Destination exists, not renaming: {:?}", destination);
                return Ok(None);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(RenameError::io(&destination, e)),
        }

        if !confirm(source, &destination).map_err(RenameError::Confirm)? {
            debug!("Rename declined: {:?}", source);
            return Ok(None);
        }

        info!("Renaming file: {:?} -> {:?}", source, destination);
        fs::rename(source, &destination).map_err(|e| RenameError::io(source, e))?;

        Ok(Some(LogEntry::Renamed(destination)))
    }
}
