use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "prj")]
#[command(about = "Command-line client for the projects REST API")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (falls back to PRJ_SERVER_URL, then http://127.0.0.1:8000)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
