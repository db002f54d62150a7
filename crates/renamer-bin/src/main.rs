mod cli;
mod prompt;

use anyhow::Result;
use cli::Cli;
use renamer_core::RenameOutcome;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    setup_logging(&cli)?;

    info!("Starting renamer");

    let inputs = prompt::resolve_inputs(cli.root, cli.match_name, cli.new_name)?;

    info!("Root path: {:?}", inputs.root);
    info!("Interactive mode: {}", cli.interactive);
    info!("Sorted traversal: {}", cli.sorted);

    let outcome = if cli.interactive {
        renamer_core::rename_interactive(
            &inputs.root,
            &inputs.match_name,
            &inputs.new_name,
            cli.sorted,
            prompt::confirm_rename,
        )?
    } else {
        renamer_core::rename(&inputs.root, &inputs.match_name, &inputs.new_name, cli.sorted)?
    };

    report(&outcome)?;

    info!("Renamer completed successfully");
    Ok(())
}

fn report(outcome: &RenameOutcome) -> Result<()> {
    for line in outcome.log_lines() {
        println!("{}", line);
    }

    if !outcome.matched {
        warn!("No file matched anywhere in the tree");
        anyhow::bail!("No original file found");
    }

    println!("Operation complete");
    println!("  Files found: {}", outcome.found_count());
    println!("  Files renamed: {}", outcome.renamed_count());

    Ok(())
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact()
        )
        .with(filter)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use renamer_core::LogEntry;
    use std::path::PathBuf;

    #[test]
    fn test_report_fails_when_nothing_matched() {
        let err = report(&RenameOutcome::empty()).unwrap_err();
        assert_eq!(err.to_string(), "No original file found");
    }

    #[test]
    fn test_report_succeeds_when_matched() {
        let outcome = RenameOutcome {
            log: vec![
                LogEntry::Found(PathBuf::from("/res/img.png")),
                LogEntry::Renamed(PathBuf::from("/res/icon.png")),
            ],
            matched: true,
        };
        assert!(report(&outcome).is_ok());
    }

    #[test]
    fn test_report_succeeds_when_matched_but_conflicted() {
        let outcome = RenameOutcome {
            log: vec![LogEntry::Found(PathBuf::from("/res/img.png"))],
            matched: true,
        };
        assert!(report(&outcome).is_ok());
    }
}
