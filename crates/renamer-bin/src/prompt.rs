use anyhow::Result;
use inquire::{Confirm, Text};
use std::path::{Path, PathBuf};

/// The three values the renamer needs, after any prompting.
#[derive(Debug, PartialEq, Eq)]
pub struct RenameInputs {
    pub root: PathBuf,
    pub match_name: String,
    pub new_name: String,
}

/// Fills in whatever the command line left out, asking in the order
/// path, original name, new name. The original name is only asked for
/// when the path was too.
pub fn resolve_inputs(
    root: Option<PathBuf>,
    match_name: Option<String>,
    new_name: Option<String>,
) -> Result<RenameInputs> {
    let prompt_for_match = root.is_none() && match_name.is_none();

    let root = match root {
        Some(root) => root,
        None => PathBuf::from(Text::new("Path:").prompt()?),
    };

    let match_name = match match_name {
        Some(name) => name,
        None if prompt_for_match => Text::new("Original file name:")
            .with_help_message("Leave empty to rename every file")
            .prompt()?,
        None => String::new(),
    };

    let new_name = match new_name {
        Some(name) => name,
        None => Text::new("New file name:").prompt()?,
    };

    Ok(RenameInputs {
        root,
        match_name,
        new_name,
    })
}

pub fn confirm_rename(old_path: &Path, new_path: &Path) -> Result<bool> {
    println!("\n📁 File rename:");
    println!("  \x1b[31m- {}\x1b[0m", old_path.display());
    println!("  \x1b[32m+ {}\x1b[0m", new_path.display());

    let apply_change = Confirm::new("Apply this rename?")
        .with_default(true)
        .prompt()?;

    Ok(apply_change)
}
