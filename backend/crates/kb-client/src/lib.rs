//! kb-client library
//!
//! HTTP client for kb-server, plus the client-side board store used for
//! optimistic drag-and-drop.

pub mod auth_commands;
pub mod board_commands;
pub mod cli;
pub(crate) mod client;
pub mod column_commands;
pub mod commands;
pub mod comment_commands;
pub mod session;
pub mod store;
pub mod task_commands;


pub use client::{CliClientResult, Client, ClientError};
pub use session::BoardSession;
pub use store::{BoardStore, ColumnCard, DropTarget, MoveRequest, TaskCard};
