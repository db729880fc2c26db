use clap::Subcommand;

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// List a board's columns
    List {
        /// Board ID (UUID)
        board_id: String,
    },

    /// Append a column to a board
    Create {
        /// Board ID (UUID)
        #[arg(long)]
        board_id: String,

        #[arg(long)]
        name: String,
    },

    /// Rename or reposition a column
    Update {
        /// Column ID (UUID)
        id: String,

        #[arg(long)]
        name: Option<String>,

        /// New order, stored as given
        #[arg(long)]
        order: Option<i32>,
    },

    /// Delete a column and its tasks
    Delete {
        /// Column ID (UUID)
        id: String,
    },
}
