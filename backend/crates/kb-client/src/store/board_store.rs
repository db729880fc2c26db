use crate::store::{ColumnCard, DropTarget, MoveRequest, TaskCard};

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DragSession {
    task_id: Uuid,
}

/// Local copy of one board's columns and tasks.
///
/// State changes only through the methods below. A drag relabels the task's
/// column as it crosses columns, a drop yields at most one [`MoveRequest`],
/// and the server's answer is only ever applied by
/// [`BoardStore::reconcile_from_server`]. A failed move is not rolled back.
#[derive(Debug, Clone, Default)]
pub struct BoardStore {
    columns: HashMap<Uuid, ColumnCard>,
    tasks: HashMap<Uuid, TaskCard>,
    /// Position of each task in the last server listing; final tie-break
    server_rank: HashMap<Uuid, usize>,
    drag: Option<DragSession>,
    /// Lowercased
    search: Option<String>,
    stale: bool,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with the server's view. Ends any drag.
    pub fn reconcile_from_server(&mut self, columns: Vec<ColumnCard>, tasks: Vec<TaskCard>) {
        self.columns = columns.into_iter().map(|c| (c.id, c)).collect();
        self.server_rank = tasks.iter().enumerate().map(|(i, t)| (t.id, i)).collect();
        self.tasks = tasks.into_iter().map(|t| (t.id, t)).collect();
        self.drag = None;
        self.stale = false;
        log::debug!(
            "Reconciled board store: {} columns, {} tasks",
            self.columns.len(),
            self.tasks.len()
        );
    }

    /// Filter applied to [`BoardStore::tasks_in_column`]; blank clears it
    pub fn set_search(&mut self, term: Option<&str>) {
        self.search = term
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
    }

    /// Columns by order, then creation
    pub fn columns(&self) -> Vec<&ColumnCard> {
        let mut columns: Vec<&ColumnCard> = self.columns.values().collect();
        columns.sort_by_key(|c| (c.order, c.created_at, c.id));
        columns
    }

    pub fn task(&self, task_id: Uuid) -> Option<&TaskCard> {
        self.tasks.get(&task_id)
    }

    /// Tasks currently shown in a column, honoring the search term
    pub fn tasks_in_column(&self, column_id: Uuid) -> Vec<&TaskCard> {
        let mut tasks: Vec<&TaskCard> = self
            .tasks
            .values()
            .filter(|t| t.column_id == column_id)
            .filter(|t| self.search.as_deref().is_none_or(|needle| t.matches(needle)))
            .collect();
        tasks.sort_by_key(|t| {
            (
                t.order,
                t.created_at,
                self.server_rank.get(&t.id).copied().unwrap_or(usize::MAX),
            )
        });
        tasks
    }

    /// The task being dragged, if any
    pub fn dragging(&self) -> Option<Uuid> {
        self.drag.map(|d| d.task_id)
    }

    /// A move was sent and the local view no longer matches the server
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Start dragging `task_id`. Unknown tasks are ignored.
    pub fn begin_drag(&mut self, task_id: Uuid) -> bool {
        if !self.tasks.contains_key(&task_id) {
            log::debug!("Ignoring drag of unknown task {}", task_id);
            return false;
        }
        self.drag = Some(DragSession { task_id });
        true
    }

    /// Pointer moved over `target`. Returns whether the dragged task was
    /// relabeled into a different column.
    pub fn drag_over(&mut self, target: DropTarget) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let Some(column_id) = self.target_column(target) else {
            return false;
        };
        let Some(task) = self.tasks.get_mut(&drag.task_id) else {
            return false;
        };

        if task.column_id == column_id {
            return false;
        }
        task.column_id = column_id;
        true
    }

    /// Release the drag over `target`.
    ///
    /// Yields the one move to send, or `None` when nothing was being dragged,
    /// the drop landed on nothing, or the task was dropped on itself. The order
    /// is the hovered task's index in the destination's local list, or the
    /// list's length when dropped on the column.
    pub fn drop_on(&mut self, target: Option<DropTarget>) -> Option<MoveRequest> {
        let drag = self.drag.take()?;
        let target = target?;
        if target == DropTarget::Task(drag.task_id) {
            return None;
        }
        let column_id = self.target_column(target)?;

        let index = {
            let siblings = self.tasks_in_column(column_id);
            match target {
                DropTarget::Task(over) => siblings.iter().position(|t| t.id == over)?,
                DropTarget::Column(_) => siblings.len(),
            }
        };
        let order = i32::try_from(index).unwrap_or(i32::MAX);

        let task = self.tasks.get_mut(&drag.task_id)?;
        task.column_id = column_id;
        task.order = order;

        Some(MoveRequest {
            task_id: drag.task_id,
            column_id,
            order,
        })
    }

    /// The server answered a move. Either way the view is stale until the next
    /// reconcile; on failure the optimistic placement stays on screen.
    pub fn record_move_outcome(&mut self, succeeded: bool) {
        if !succeeded {
            log::warn!("Move failed; keeping optimistic placement until the next refresh");
        }
        self.stale = true;
    }

    fn target_column(&self, target: DropTarget) -> Option<Uuid> {
        match target {
            DropTarget::Column(id) => self.columns.contains_key(&id).then_some(id),
            DropTarget::Task(id) => self.tasks.get(&id).map(|t| t.column_id),
        }
    }
}
