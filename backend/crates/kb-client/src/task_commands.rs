use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks on a board, or one page of a column
    List {
        /// Board ID (UUID)
        #[arg(
            long,
            conflicts_with_all = ["column_id", "search", "sort", "page", "limit"],
            required_unless_present = "column_id"
        )]
        board_id: Option<String>,

        /// Column ID (UUID)
        #[arg(long)]
        column_id: Option<String>,

        /// Case-insensitive search on title or description (column listing only)
        #[arg(long, requires = "column_id")]
        search: Option<String>,

        /// Sort order: created, priority (column listing only)
        #[arg(long, requires = "column_id")]
        sort: Option<String>,

        #[arg(long, requires = "column_id")]
        page: Option<u32>,

        #[arg(long, requires = "column_id")]
        limit: Option<u32>,
    },

    /// Get a task
    Get {
        /// Task ID (UUID)
        id: String,
    },

    /// Append a task to a column
    Create {
        /// Column ID (UUID)
        #[arg(long)]
        column_id: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        description: Option<String>,

        /// Priority: high, medium, low
        #[arg(long)]
        priority: Option<String>,
    },

    /// Edit a task's fields
    Update {
        /// Task ID (UUID)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// Empty string clears the description
        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        priority: Option<String>,
    },

    /// Move a task the way a drag-and-drop would
    Move {
        /// Task ID (UUID)
        id: String,

        /// Destination column ID (UUID)
        #[arg(long)]
        column: String,

        /// Drop onto this task; omit to drop past the column's last task
        #[arg(long)]
        before: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID (UUID)
        id: String,
    },
}
