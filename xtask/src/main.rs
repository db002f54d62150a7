use std::process;

use anyhow::Result;
use clap::{ArgMatches, Command};

const BIN_NAME: &str = "renamer";

fn main() -> Result<()> {
    let args = clap::command!()
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("install").about("Install renamer binary locally"))
        .subcommand(
            Command::new("run")
                .about("Build and run renamer with arguments")
                .trailing_var_arg(true)
                .allow_hyphen_values(true)
                .arg(clap::Arg::new("args")
                    .help("Arguments to pass to renamer")
                    .action(clap::ArgAction::Append)
                    .num_args(0..))
        )
        .subcommand(
            Command::new("test")
                .about("Test Operations")
                .subcommand(Command::new("all").about("Run all tests for the entire project"))
                .subcommand(Command::new("core").about("Run tests for renamer-core"))
                .subcommand(Command::new("bin").about("Run tests for renamer-bin"))
                .subcommand(Command::new("integration").about("Run integration tests"))
        )
        .get_matches();

    match args.subcommand() {
        Some(("install", _args)) => handle_install_command(),
        Some(("run", args)) => handle_run_command(args),
        Some(("test", args)) => handle_test_commands(args),
        Some((command, _)) => anyhow::bail!("Unexpected command: {command}"),
        None => anyhow::bail!("Expected subcommand"),
    }
}

fn handle_install_command() -> Result<()> {
    println!("Installing {BIN_NAME}...");
    cargo(&["install", "--path", "crates/renamer-bin"], "Failed to install renamer")?;
    println!("✓ {BIN_NAME} installed successfully");
    Ok(())
}

fn handle_run_command(args: &ArgMatches) -> Result<()> {
    println!("Building and running {BIN_NAME}...");

    let run_args: Vec<String> = args.get_many::<String>("args")
        .map_or(Vec::new(), |vals| vals.cloned().collect());

    let mut command_args = vec!["run", "--bin", BIN_NAME, "--"];
    command_args.extend(run_args.iter().map(String::as_str));

    cargo(&command_args, "Failed to run renamer")
}

fn handle_test_commands(args: &ArgMatches) -> Result<()> {
    match args.subcommand() {
        Some(("all", _args)) => test_all(),
        Some(("core", _args)) => test_core(),
        Some(("bin", _args)) => test_bin(),
        Some(("integration", _args)) => test_integration(),
        _ => {
            println!("Available test commands:");
            println!("  all          - Run all tests for the entire project");
            println!("  core         - Run tests for renamer-core");
            println!("  bin          - Run tests for renamer-bin");
            println!("  integration  - Run integration tests");
            Ok(())
        }
    }
}

fn test_all() -> Result<()> {
    println!("🧪 Running all tests for the renamer project...\n");

    let suites: [(&str, fn() -> Result<()>); 4] = [
        ("renamer-core", test_core),
        ("renamer-bin", test_bin),
        ("documentation", test_docs),
        ("integration", test_integration),
    ];

    let mut failed = Vec::new();
    for (name, suite) in suites {
        println!("▶ {name}");
        match suite() {
            Ok(()) => println!("✅ {name} passed\n"),
            Err(e) => {
                println!("❌ {name} failed: {e:?}\n");
                failed.push(name);
            }
        }
    }

    if !failed.is_empty() {
        println!("💥 Failed suites: {}", failed.join(", "));
        anyhow::bail!("Test suite failed");
    }

    println!("🎉 All tests passed successfully!");
    Ok(())
}

fn test_core() -> Result<()> {
    cargo(&["test", "--package", "renamer-core", "--lib"], "Core tests failed")
}

fn test_bin() -> Result<()> {
    cargo(&["test", "--package", "renamer-bin"], "Binary tests failed")
}

fn test_docs() -> Result<()> {
    cargo(&["test", "--doc", "--package", "renamer-core"], "Documentation tests failed")
}

fn test_integration() -> Result<()> {
    cargo(
        &["test", "--package", "renamer-core", "--test", "rename_properties"],
        "Integration tests failed",
    )?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--help"], "CLI help command failed")?;
    cargo(&["run", "--bin", BIN_NAME, "--", "--version"], "CLI version command failed")
}

fn cargo(args: &[&str], failure: &str) -> Result<()> {
    let status = process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }
    Ok(())
}
