use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects
    List,
    /// Get a project by ID
    Get {
        /// Project ID (24 hex characters)
        id: String,
    },
    /// Create a new project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a project's title and, optionally, its description
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project
    Delete { id: String },
}
