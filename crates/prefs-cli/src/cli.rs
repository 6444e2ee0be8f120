use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "prefs")]
#[command(about = "Review and edit your preferences from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the preferences store
    #[arg(long, global = true, value_name = "PATH")]
    pub store_path: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, value_enum, default_value_t = Backend::Sqlite)]
    pub backend: Backend,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the saved preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Edit preferences and save them in one step
    Edit(EditArgs),
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct EditArgs {
    /// Contact email address
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,
    /// First name
    #[arg(long, value_name = "NAME")]
    pub first_name: Option<String>,
    /// Last name
    #[arg(long, value_name = "NAME")]
    pub last_name: Option<String>,
    /// Download maps for offline use
    #[arg(long, value_name = "BOOL")]
    pub download_maps: Option<bool>,
    /// Post reports anonymously
    #[arg(long, value_name = "BOOL")]
    pub discrete: Option<bool>,
    /// Map zoom level (clamped to 1-21)
    #[arg(long, value_name = "LEVEL", allow_negative_numbers = true)]
    pub zoom: Option<f64>,
    /// Upload image width in pixels (clamped to 200-1024)
    #[arg(long, value_name = "PIXELS", allow_negative_numbers = true)]
    pub image_width: Option<f64>,
    /// Set any field by key, e.g. `--set first_name=Ada`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub assignments: Vec<String>,
    /// Apply the edits, then discard them instead of saving
    #[arg(long)]
    pub cancel: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Backend {
    Sqlite,
    Json,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
