pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "coverly",
    about = "Coverly operator CLI",
    long_about = "Rate insurance intakes, inspect catalogs and config, and run readiness checks.",
    after_help = "Examples:\n  coverly quote --collection \"Accident Insurance\" --answers intake.json\n  coverly collections\n  coverly doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Rate an answers file against a collection and print the recommendation")]
    Quote {
        #[arg(long, help = "Product collection name, e.g. \"Accident Insurance\"")]
        collection: String,
        #[arg(long, help = "Path to a JSON answers map (question id -> answer), or - for stdin")]
        answers: PathBuf,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List the product collections and variants the engine can rate")]
    Collections,
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
    #[command(about = "Validate config, catalog integrity, and a rating smoke scenario")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Quote { collection, answers, json } => {
            commands::quote::run(&collection, &answers, json)
        }
        Command::Collections => {
            commands::CommandResult { exit_code: 0, output: commands::collections::run() }
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
