use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on a task
    List {
        /// Task ID (UUID)
        task_id: String,
    },

    /// Comment on a task
    Create {
        /// Task ID (UUID)
        #[arg(long)]
        task_id: String,

        #[arg(long)]
        content: String,
    },

    /// Delete one of your comments
    Delete {
        /// Comment ID (UUID)
        id: String,
    },
}
