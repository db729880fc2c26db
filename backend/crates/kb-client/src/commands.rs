use crate::{
    auth_commands::AuthCommands, board_commands::BoardCommands, column_commands::ColumnCommands,
    comment_commands::CommentCommands, task_commands::TaskCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Registration and profile
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Board operations
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },

    /// Column operations
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Comment operations
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
}
