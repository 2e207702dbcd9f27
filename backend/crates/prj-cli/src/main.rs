//! prj - command-line client for the projects REST API
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! prj project list --pretty
//!
//! # Create a project
//! prj project create --title "Demo" --description "First project"
//!
//! # Rename it
//! prj project update <id> --title "Renamed"
//! ```

use prj_cli::{Cli, Client, Commands, ProjectCommands, resolve_server_url};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&resolve_server_url(cli.server));

    let result = match cli.command {
        Commands::Project { action } => match action {
            ProjectCommands::List => client.list_projects().await,
            ProjectCommands::Get { id } => client.get_project(&id).await,
            ProjectCommands::Create { title, description } => {
                client.create_project(&title, description.as_deref()).await
            }
            ProjectCommands::Update {
                id,
                title,
                description,
            } => {
                client
                    .update_project(&id, &title, description.as_deref())
                    .await
            }
            ProjectCommands::Delete { id } => client.delete_project(&id).await,
        },
    };

    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
