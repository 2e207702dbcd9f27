//! prj-cli library
//!
//! Exports the HTTP client and argument types for the `prj` binary and tests.

pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod project_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use commands::Commands;
pub use project_commands::ProjectCommands;

/// Environment variable consulted when `--server` is not given
pub const SERVER_URL_ENV: &str = "PRJ_SERVER_URL";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Priority: `--server` flag > PRJ_SERVER_URL env var > default
pub fn resolve_server_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(SERVER_URL_ENV).ok())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
}
