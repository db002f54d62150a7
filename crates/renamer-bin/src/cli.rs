use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renamer")]
#[command(version)]
#[command(about = "Recursively rename files without overwriting existing ones")]
#[command(long_about = "Walks a directory tree and renames matching files to a new name inside their own directory. A file is never renamed onto a name that is already taken in its directory.")]
pub struct Cli {
    #[arg(help = "Root directory to walk (prompted for when omitted)")]
    pub root: Option<PathBuf>,

    #[arg(help = "New file name (prompted for when omitted)")]
    pub new_name: Option<String>,

    #[arg(short, long = "match", value_name = "OLD_NAME", help = "Exact file name to rename (empty renames every file)")]
    pub match_name: Option<String>,

    #[arg(long, help = "Process directory entries in file name order")]
    pub sorted: bool,

    #[arg(short, long, help = "Interactive mode - confirm each rename")]
    pub interactive: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
