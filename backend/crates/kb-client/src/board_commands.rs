use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// List your boards
    List,

    /// Get a board with its columns
    Get {
        /// Board ID (UUID)
        id: String,
    },

    /// Create a board with the default columns
    Create {
        #[arg(long)]
        name: String,
    },

    /// Delete a board and everything on it
    Delete {
        /// Board ID (UUID)
        id: String,
    },
}
