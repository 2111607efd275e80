//! # Kanboard Core
//!
//! Board state, drag-reorder logic and persistence for a single-user kanban
//! app: boards contain ordered columns, columns contain ordered tasks.
//!
//! The [`store::BoardStore`] is the single source of truth for the board
//! tree; [`domain::drag`] turns live drag gestures into move instructions the
//! store applies; [`storage`] persists the full board set as one JSON blob.
//! The view layer is deliberately absent — it drives the store through its
//! mutation methods and re-renders from whatever state results.

pub mod domain;
pub mod error;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column},
    drag::{reduce_drag, DragItem, DragSession, DropTarget, MoveInstruction},
    task::{BoardId, ColumnId, Task, TaskId},
};
pub use error::{KanboardError, Result};
pub use storage::Storage;
pub use store::BoardStore;
