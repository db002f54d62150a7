use std::path::{Path, PathBuf};

pub mod outcome;
pub mod renamer;
pub mod request;

pub use outcome::{LogEntry, RenameOutcome};
pub use renamer::Renamer;
pub use request::{MatchRule, RenameRequest};

#[derive(thiserror::Error, Debug)]
pub enum RenameError {
    #[error("Invalid path: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Please enter a path")]
    EmptyRootPath,
    #[error("Please enter a new file name")]
    EmptyTargetName,
    #[error("New file name must be a plain file name: '{name}'")]
    InvalidTargetName { name: String },
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Confirmation failed: {0}")]
    Confirm(anyhow::Error),
}

impl RenameError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        RenameError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenameError>;

/// Renames every file under `root` selected by `match_name` to `target_name`
/// within its own parent directory.
///
/// An empty `match_name` selects every file. Existing entries named
/// `target_name` are never overwritten; the source is logged as found and
/// left in place.
///
/// With `sorted` set, each directory is processed in file name order rather
/// than the order the filesystem returns.
///
/// Not safe to run concurrently with another invocation over an overlapping
/// tree: the conflict check and the rename are separate filesystem calls.
pub fn rename(
    root: impl AsRef<Path>,
    match_name: &str,
    target_name: &str,
    sorted: bool,
) -> Result<RenameOutcome> {
    let request = RenameRequest::new(root.as_ref(), match_name, target_name)?;
    Renamer::new(request).sorted(sorted).run()
}

/// Like [`rename`], but every rename is first offered to `confirm` with the
/// source and destination paths. Declined renames are skipped.
pub fn rename_interactive<F>(
    root: impl AsRef<Path>,
    match_name: &str,
    target_name: &str,
    sorted: bool,
    confirm: F,
) -> Result<RenameOutcome>
where
    F: Fn(&Path, &Path) -> anyhow::Result<bool>,
{
    let request = RenameRequest::new(root.as_ref(), match_name, target_name)?;
    Renamer::new(request).sorted(sorted).run_with_confirm(confirm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rename_missing_root_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does/not/exist");

        let result = rename(&missing, "", "x.png", false);

        match result {
            Err(RenameError::NotFound { path }) => assert_eq!(path, missing),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_rename_rejects_blank_target() {
        let temp_dir = TempDir::new().unwrap();
        let result = rename(temp_dir.path(), "img.png", "  ", false);
        assert!(matches!(result, Err(RenameError::EmptyTargetName)));
    }

    #[test]
    fn test_rename_interactive_declined() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("img.png"), "a").unwrap();

        let outcome =
            rename_interactive(temp_dir.path(), "img.png", "icon.png", true, |_, _| Ok(false)).unwrap();

        assert!(outcome.matched);
        assert_eq!(outcome.found_count(), 1);
        assert_eq!(outcome.renamed_count(), 0);
        assert!(temp_dir.path().join("img.png").exists());
        assert!(!temp_dir.path().join("icon.png").exists());
    }

    #[test]
    fn test_rename_interactive_callback_error_aborts() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("img.png"), "a").unwrap();

        let result = rename_interactive(temp_dir.path(), "img.png", "icon.png", true, |_, _| {
            anyhow::bail!("prompt closed")
        });

        assert!(matches!(result, Err(RenameError::Confirm(_))));
        assert!(temp_dir.path().join("img.png").exists());
    }

    #[test]
    fn test_not_found_message() {
        let err = RenameError::NotFound {
            path: PathBuf::from("/does/not/exist"),
        };
        assert_eq!(err.to_string(), "Invalid path: /does/not/exist");
    }
}
