use uuid::Uuid;

/// The single write a drop produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: Uuid,
    pub column_id: Uuid,
    pub order: i32,
}
