use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "linedelta",
    about = "Line-oriented diff reports and change summaries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a detailed report of the changes between two files
    Diff(PairArgs),
    /// Show a one-line change summary for two files
    Summary(PairArgs),
    /// Summarize every file that changed between two directories
    Batch(BatchArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args)]
pub struct PairArgs {
    pub before: PathBuf,
    pub after: PathBuf,
}

#[derive(Args)]
pub struct BatchArgs {
    pub before_dir: PathBuf,
    pub after_dir: PathBuf,
    /// Compare one pair at a time
    #[arg(long)]
    pub sequential: bool,
}
