use crate::domain::board::Board;
use crate::domain::task::{BoardId, ColumnId, TaskId};

/// The item currently being dragged
///
/// A task always names the column it currently sits in; callers must pass
/// this explicitly from the gesture payload rather than relying on whatever
/// container metadata their drag library tracks internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    Task { id: TaskId, column_id: ColumnId },
    Column { id: ColumnId },
}

/// The item or container currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Task { id: TaskId, column_id: ColumnId },
    Column { id: ColumnId },
}

/// A computed, not-yet-applied relocation of a task or column
///
/// Produced by [`reduce_drag`] and consumed by
/// [`BoardStore::move_task`](crate::store::BoardStore::move_task) /
/// [`BoardStore::move_column`](crate::store::BoardStore::move_column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInstruction {
    Task {
        board_id: BoardId,
        source_column_id: ColumnId,
        dest_column_id: ColumnId,
        source_index: usize,
        dest_index: usize,
    },
    Column {
        board_id: BoardId,
        source_index: usize,
        dest_index: usize,
    },
}

/// Translates one drag-over observation into a move instruction
///
/// Pure and idempotent: the same inputs always yield the same instruction,
/// and nothing is mutated here. Returns `None` whenever the gesture should
/// not move anything:
///
/// - the dragged item is over itself
/// - a column is dragged over anything that is not a column
/// - any id fails to resolve against the given board
///
/// Dropping a task onto another task inserts before it (the target task's
/// current index becomes the insertion index under remove-then-insert
/// semantics); dropping onto a column's empty area appends to that column.
pub fn reduce_drag(board: &Board, dragged: DragItem, target: DropTarget) -> Option<MoveInstruction> {
    match (dragged, target) {
        (DragItem::Task { id, .. }, DropTarget::Task { id: over_id, .. }) if id == over_id => None,
        (DragItem::Column { id }, DropTarget::Column { id: over_id }) if id == over_id => None,

        // Columns only reorder against other columns.
        (DragItem::Column { .. }, DropTarget::Task { .. }) => None,
        (DragItem::Column { id }, DropTarget::Column { id: over_id }) => {
            let source_index = board.column_index(&id)?;
            let dest_index = board.column_index(&over_id)?;
            Some(MoveInstruction::Column {
                board_id: board.id,
                source_index,
                dest_index,
            })
        }

        (
            DragItem::Task { id, column_id },
            DropTarget::Task {
                id: over_id,
                column_id: over_column_id,
            },
        ) => {
            let source_column = board.column(&column_id)?;
            let dest_column = board.column(&over_column_id)?;
            let source_index = source_column.task_index(&id)?;
            let dest_index = dest_column.task_index(&over_id)?;
            Some(MoveInstruction::Task {
                board_id: board.id,
                source_column_id: column_id,
                dest_column_id: over_column_id,
                source_index,
                dest_index,
            })
        }

        (DragItem::Task { id, column_id }, DropTarget::Column { id: over_column_id }) => {
            let source_column = board.column(&column_id)?;
            let dest_column = board.column(&over_column_id)?;
            let source_index = source_column.task_index(&id)?;
            Some(MoveInstruction::Task {
                board_id: board.id,
                source_column_id: column_id,
                dest_column_id: over_column_id,
                source_index,
                dest_index: dest_column.tasks.len(),
            })
        }
    }
}

/// Captured state of one drag gesture, from drag-start to drag-end
///
/// The session holds which item is being dragged so that every drag-over
/// event during the gesture can be reduced against it. Ending the gesture
/// always clears the capture, whether or not a valid drop occurred.
#[derive(Debug, Default)]
pub struct DragSession {
    dragged: Option<DragItem>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the dragged item at gesture start
    pub fn start(&mut self, item: DragItem) {
        self.dragged = Some(item);
    }

    /// The item captured by the current gesture, if one is in progress
    pub fn dragged(&self) -> Option<&DragItem> {
        self.dragged.as_ref()
    }

    /// Reduces a drag-over event against the captured item
    ///
    /// Returns `None` when no gesture is in progress.
    pub fn drag_over(&self, board: &Board, target: DropTarget) -> Option<MoveInstruction> {
        reduce_drag(board, self.dragged?, target)
    }

    /// Ends the gesture, valid drop or not, dropping the capture
    pub fn end(&mut self) {
        self.dragged = None;
    }
}
