pub mod board;
pub mod drag;
pub mod task;

pub use board::{Board, Column};
pub use drag::{reduce_drag, DragItem, DragSession, DropTarget, MoveInstruction};
pub use task::{BoardId, ColumnId, Task, TaskId};
