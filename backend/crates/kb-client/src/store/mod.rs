//! Client-side board state with optimistic drag-and-drop.

mod board_store;
mod column_card;
mod drop_target;
mod move_request;
mod task_card;

pub use board_store::BoardStore;
pub use column_card::ColumnCard;
pub use drop_target::DropTarget;
pub use move_request::MoveRequest;
pub use task_card::TaskCard;
