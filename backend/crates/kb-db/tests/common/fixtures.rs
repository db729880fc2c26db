use kb_core::{Board, Column, Comment, Priority, Task};
use kb_db::{BoardRepository, ColumnRepository, TaskRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

pub fn create_test_board(owner_id: Uuid) -> Board {
    Board::new(owner_id, "Test Board".to_string())
}

pub fn create_test_column(board_id: Uuid, order: i32) -> Column {
    Column::new(board_id, format!("Column {order}"), order)
}

pub fn create_test_task(column_id: Uuid, creator_id: Uuid, order: i32) -> Task {
    Task::new(
        column_id,
        creator_id,
        format!("Task {order}"),
        Some("Test description".to_string()),
        Priority::Medium,
        order,
    )
}

pub fn create_test_comment(task_id: Uuid, author_id: Uuid) -> Comment {
    Comment::new(task_id, author_id, "Test comment".to_string())
}

/// Inserts a board with one empty column and returns both.
pub async fn seed_board_with_column(pool: &SqlitePool, owner_id: Uuid) -> (Board, Column) {
    let board = create_test_board(owner_id);
    BoardRepository::create(pool, &board).await.unwrap();
    let column = create_test_column(board.id, 0);
    ColumnRepository::create(pool, &column).await.unwrap();
    (board, column)
}

/// Inserts tasks with the given orders into a column, in that sequence.
pub async fn seed_tasks(
    pool: &SqlitePool,
    column_id: Uuid,
    creator_id: Uuid,
    orders: &[i32],
) -> Vec<Task> {
    let mut tasks = Vec::with_capacity(orders.len());
    for order in orders {
        let task = create_test_task(column_id, creator_id, *order);
        TaskRepository::create(pool, &task).await.unwrap();
        tasks.push(task);
    }
    tasks
}
