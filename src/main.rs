//! new-question - scaffold a new solution crate
//!
//! Creates `<name>/Cargo.toml` and `<name>/src/main.rs` and adds `<name>`
//! to the workspace members.

use std::path::PathBuf;

use advent_scaffold::commands;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "new-question")]
#[command(author, version, about = "Scaffold a new solution crate and add it to the workspace")]
struct Cli {
    /// Name of the new crate directory (e.g., "seventeen")
    name: String,

    /// Workspace root containing the workspace Cargo.toml
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match commands::new_question(&cli.root, &cli.name, cli.dry_run) {
        Ok(_) => Ok(()),
        Err(e) if commands::is_already_exists(&e) => {
            eprintln!("ERROR: {} already exists", cli.name);
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

/// Initialize tracing from the verbosity flag only
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
