//! A board loaded from the server into a [`BoardStore`], with drag-and-drop
//! moves sent back through the [`Client`].

use crate::store::{BoardStore, ColumnCard, DropTarget, TaskCard};
use crate::{CliClientResult, Client, ClientError};

use serde_json::Value;
use uuid::Uuid;

pub struct BoardSession {
    client: Client,
    board_id: Uuid,
    store: BoardStore,
}

impl BoardSession {
    /// Fetch the board and its tasks
    pub async fn load(client: Client, board_id: Uuid) -> CliClientResult<Self> {
        let mut session = Self {
            client,
            board_id,
            store: BoardStore::new(),
        };
        session.refresh().await?;
        Ok(session)
    }

    pub fn board_id(&self) -> Uuid {
        self.board_id
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BoardStore {
        &mut self.store
    }

    /// Replace local state with the server's
    pub async fn refresh(&mut self) -> CliClientResult<()> {
        let board_id = self.board_id.to_string();
        let board = self.client.get_board(&board_id).await?;
        let tasks = self.client.list_board_tasks(&board_id).await?;

        let columns: Vec<ColumnCard> = serde_json::from_value(field(&board["board"], "columns")?)?;
        let tasks: Vec<TaskCard> = serde_json::from_value(field(&tasks, "tasks")?)?;

        self.store.reconcile_from_server(columns, tasks);
        Ok(())
    }

    /// Drag `task_id` across `hovered` and release it over `drop`.
    ///
    /// Sends at most one PATCH. On success the board is refetched and the
    /// server's task is returned; `Ok(None)` means the gesture produced no
    /// move. On failure the error is returned and the optimistic placement is
    /// left in the store until [`BoardSession::refresh`].
    pub async fn drag_and_drop(
        &mut self,
        task_id: Uuid,
        hovered: &[DropTarget],
        drop: Option<DropTarget>,
    ) -> CliClientResult<Option<Value>> {
        if !self.store.begin_drag(task_id) {
            return Ok(None);
        }
        for target in hovered {
            self.store.drag_over(*target);
        }
        let Some(request) = self.store.drop_on(drop) else {
            return Ok(None);
        };

        log::info!(
            "Moving task {} to column {} at {}",
            request.task_id,
            request.column_id,
            request.order
        );

        let column_id = request.column_id.to_string();
        let result = self
            .client
            .move_task(
                &request.task_id.to_string(),
                Some(&column_id),
                Some(request.order),
            )
            .await;
        self.store.record_move_outcome(result.is_ok());

        let moved = result?;
        self.refresh().await?;
        Ok(Some(moved))
    }
}

impl BoardSession {
    /// Drag `task_id` into `column_id` and drop it just before `before`, or
    /// past the column's last task when `before` is `None`.
    ///
    /// `before` must sit in `column_id`; anything else is rejected before any
    /// request is sent.
    pub async fn move_task(
        &mut self,
        task_id: Uuid,
        column_id: Uuid,
        before: Option<Uuid>,
    ) -> CliClientResult<Option<Value>> {
        if let Some(before) = before {
            match self.store.task(before) {
                Some(task) if task.column_id == column_id => {}
                Some(task) => {
                    return Err(ClientError::usage(format!(
                        "task {} is in column {}, not {}",
                        before, task.column_id, column_id
                    )));
                }
                None => {
                    return Err(ClientError::usage(format!(
                        "task {} is not on board {}",
                        before, self.board_id
                    )));
                }
            }
        }

        let column = DropTarget::Column(column_id);
        let drop = before.map_or(column, DropTarget::Task);
        self.drag_and_drop(task_id, &[column], Some(drop)).await
    }
}

fn field(value: &Value, name: &str) -> CliClientResult<Value> {
    value
        .get(name)
        .cloned()
        .ok_or_else(|| ClientError::usage(format!("server response has no '{name}'")))
}
