//! kb - Kanban board CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a board and list it
//! kb board create --name "Launch" --pretty
//! kb board list
//!
//! # Add a task and drag it onto another task in a different column
//! kb task create --column-id <uuid> --title "Write docs"
//! kb task move <task-id> --column <uuid> --before <other-task-id>
//! ```

use kb_client::{
    BoardSession, CliClientResult, Client, ClientError,
    auth_commands::AuthCommands,
    board_commands::BoardCommands,
    cli::Cli,
    column_commands::ColumnCommands,
    commands::Commands,
    comment_commands::CommentCommands,
    task_commands::TaskCommands,
};

use std::process::ExitCode;

use clap::Parser;
use serde_json::{Value, json};
use uuid::Uuid;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client =
        Client::new(&cli.server_url(), cli.user_id.as_deref()).with_token(cli.token.as_deref());

    let result = run(client, cli.command).await;

    // Handle result
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

async fn run(client: Client, command: Commands) -> CliClientResult<Value> {
    match command {
        Commands::Auth { action } => match action {
            AuthCommands::Register { email, name } => client.register(&email, &name).await,
            AuthCommands::Me => client.me().await,
        },

        Commands::Board { action } => match action {
            BoardCommands::List => client.list_boards().await,
            BoardCommands::Get { id } => client.get_board(&id).await,
            BoardCommands::Create { name } => client.create_board(&name).await,
            BoardCommands::Delete { id } => client.delete_board(&id).await,
        },

        Commands::Column { action } => match action {
            ColumnCommands::List { board_id } => client.list_columns(&board_id).await,
            ColumnCommands::Create { board_id, name } => {
                client.create_column(&board_id, &name).await
            }
            ColumnCommands::Update { id, name, order } => {
                client.update_column(&id, name.as_deref(), order).await
            }
            ColumnCommands::Delete { id } => client.delete_column(&id).await,
        },

        Commands::Task { action } => match action {
            TaskCommands::List {
                board_id,
                column_id,
                search,
                sort,
                page,
                limit,
            } => match (board_id, column_id) {
                (_, Some(column_id)) => {
                    client
                        .list_column_tasks(
                            &column_id,
                            search.as_deref(),
                            sort.as_deref(),
                            page,
                            limit,
                        )
                        .await
                }
                (Some(board_id), None) => client.list_board_tasks(&board_id).await,
                (None, None) => Err(ClientError::usage("--board-id or --column-id is required")),
            },
            TaskCommands::Get { id } => client.get_task(&id).await,
            TaskCommands::Create {
                column_id,
                title,
                description,
                priority,
            } => {
                client
                    .create_task(
                        &column_id,
                        &title,
                        description.as_deref(),
                        priority.as_deref(),
                    )
                    .await
            }
            TaskCommands::Update {
                id,
                title,
                description,
                priority,
            } => {
                client
                    .update_task(
                        &id,
                        title.as_deref(),
                        description.as_deref(),
                        priority.as_deref(),
                    )
                    .await
            }
            TaskCommands::Move { id, column, before } => {
                move_task(client, &id, &column, before.as_deref()).await
            }
            TaskCommands::Delete { id } => client.delete_task(&id).await,
        },

        Commands::Comment { action } => match action {
            CommentCommands::List { task_id } => client.list_comments(&task_id).await,
            CommentCommands::Create { task_id, content } => {
                client.create_comment(&task_id, &content).await
            }
            CommentCommands::Delete { id } => client.delete_comment(&id).await,
        },
    }
}

/// Load the task's board, replay the gesture and send the resulting move
async fn move_task(
    client: Client,
    task_id: &str,
    column_id: &str,
    before: Option<&str>,
) -> CliClientResult<Value> {
    let task_uuid = parse_uuid(task_id, "task id")?;
    let column_uuid = parse_uuid(column_id, "--column")?;
    let before = before.map(|id| parse_uuid(id, "--before")).transpose()?;

    let task = client.get_task(task_id).await?;
    let board_id = task["task"]["column"]["board_id"]
        .as_str()
        .ok_or_else(|| ClientError::usage("task response has no board id"))?;
    let board_uuid = parse_uuid(board_id, "board id")?;

    let mut session = BoardSession::load(client, board_uuid).await?;
    match session.move_task(task_uuid, column_uuid, before).await? {
        Some(moved) => Ok(moved),
        None => Ok(json!({ "moved": false })),
    }
}

fn parse_uuid(value: &str, what: &str) -> CliClientResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| ClientError::usage(format!("invalid {what}: {e}")))
}
