//! Prefs CLI - review and edit user preferences from the terminal
//!
//! Each `edit` invocation is one form session: the given fields are applied
//! to a working copy, then saved only if the whole snapshot is valid.

mod cli;
mod commands;
mod error;
mod host;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::{resolve_store_path, OpenedStore};
use crate::commands::completions::run_completions;
use crate::commands::edit::run_edit;
use crate::commands::show::run_show;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("prefs=info,prefs_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let store_path = resolve_store_path(cli.store_path, cli.backend)?;
    tracing::debug!("Using preferences store at {:?}", store_path);
    let store = OpenedStore::open(cli.backend, &store_path)?;

    match cli.command {
        Commands::Show { json } => run_show(&store, json)?,
        Commands::Edit(args) => run_edit(&args, &store)?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
