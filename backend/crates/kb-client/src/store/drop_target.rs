use uuid::Uuid;

/// What the pointer is over during a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// The column body, past its last task
    Column(Uuid),
    /// Another task card
    Task(Uuid),
}
