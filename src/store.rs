use crate::domain::board::{Board, Column};
use crate::domain::drag::MoveInstruction;
use crate::domain::task::{BoardId, ColumnId, Task, TaskId};
use log::debug;

/// Callback run after every committed mutation
///
/// Receives the full board slice and the active board id, so the view layer
/// can re-render and the persistence collaborator can re-save.
pub type CommitListener = Box<dyn Fn(&[Board], Option<&BoardId>) + Send>;

/// Single source of truth for all boards
///
/// Owns the board tree exclusively; every mutation goes through the methods
/// here so the ordering and ownership invariants are enforced in one place.
/// Mutations either fully apply or are no-ops: blank titles, unknown ids and
/// out-of-range indices all degrade to a `false` return, never a panic or a
/// half-applied state.
pub struct BoardStore {
    boards: Vec<Board>,
    active_board_id: Option<BoardId>,
    listeners: Vec<CommitListener>,
}

impl BoardStore {
    /// Creates an empty store with no boards and no active board
    pub fn new() -> Self {
        Self {
            boards: Vec::new(),
            active_board_id: None,
            listeners: Vec::new(),
        }
    }

    /// Creates a store from restored boards; the first board becomes active
    pub fn from_boards(boards: Vec<Board>) -> Self {
        let active_board_id = boards.first().map(|board| board.id);
        Self {
            boards,
            active_board_id,
            listeners: Vec::new(),
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The board currently displayed/edited, resolved against the live tree
    ///
    /// Never a stale snapshot: the store keeps only the active board's id and
    /// looks the board up on every call.
    pub fn active_board(&self) -> Option<&Board> {
        let id = self.active_board_id.as_ref()?;
        self.boards.iter().find(|board| &board.id == id)
    }

    pub fn active_board_id(&self) -> Option<&BoardId> {
        self.active_board_id.as_ref()
    }

    /// Registers a listener invoked after every committed mutation
    pub fn subscribe(&mut self, listener: impl Fn(&[Board], Option<&BoardId>) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Switches the active board; no-op if the id is unknown or already active
    pub fn set_active_board(&mut self, board_id: &BoardId) -> bool {
        if self.active_board_id.as_ref() == Some(board_id)
            || !self.boards.iter().any(|board| &board.id == board_id)
        {
            return false;
        }
        self.active_board_id = Some(*board_id);
        self.notify();
        true
    }

    /// Creates a new empty board and makes it active
    pub fn add_board(&mut self, title: &str) -> bool {
        if title.trim().is_empty() {
            debug!("add_board rejected: blank title");
            return false;
        }
        let board = Board::new(title);
        self.active_board_id = Some(board.id);
        self.boards.push(board);
        self.notify();
        true
    }

    /// Renames a board
    pub fn update_board(&mut self, board_id: &BoardId, title: &str) -> bool {
        if title.trim().is_empty() {
            debug!("update_board rejected: blank title");
            return false;
        }
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        board.title = title.to_string();
        self.notify();
        true
    }

    /// Removes a board; the active board falls back to the first remaining
    pub fn delete_board(&mut self, board_id: &BoardId) -> bool {
        let Some(position) = self.boards.iter().position(|board| &board.id == board_id) else {
            return false;
        };
        self.boards.remove(position);
        if self.active_board_id.as_ref() == Some(board_id) {
            self.active_board_id = self.boards.first().map(|board| board.id);
        }
        self.notify();
        true
    }

    /// Appends a new empty column to a board
    pub fn add_column(&mut self, board_id: &BoardId, title: &str) -> bool {
        if title.trim().is_empty() {
            debug!("add_column rejected: blank title");
            return false;
        }
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        board.columns.push(Column::new(title));
        self.notify();
        true
    }

    /// Renames a column
    pub fn update_column(&mut self, board_id: &BoardId, column_id: &ColumnId, title: &str) -> bool {
        if title.trim().is_empty() {
            debug!("update_column rejected: blank title");
            return false;
        }
        let Some(column) = self.column_mut(board_id, column_id) else {
            return false;
        };
        column.title = title.to_string();
        self.notify();
        true
    }

    /// Removes a column and every task it holds
    pub fn delete_column(&mut self, board_id: &BoardId, column_id: &ColumnId) -> bool {
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        let Some(position) = board.column_index(column_id) else {
            return false;
        };
        board.columns.remove(position);
        self.notify();
        true
    }

    /// Appends a new task to the end of a column
    pub fn add_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        title: &str,
        description: &str,
    ) -> bool {
        if title.trim().is_empty() {
            debug!("add_task rejected: blank title");
            return false;
        }
        let Some(column) = self.column_mut(board_id, column_id) else {
            return false;
        };
        column.tasks.push(Task::new(title, description));
        self.notify();
        true
    }

    /// Updates a task's title and description in place
    pub fn update_task(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        task_id: &TaskId,
        title: &str,
        description: &str,
    ) -> bool {
        if title.trim().is_empty() {
            debug!("update_task rejected: blank title");
            return false;
        }
        let Some(column) = self.column_mut(board_id, column_id) else {
            return false;
        };
        let Some(task) = column.tasks.iter_mut().find(|task| &task.id == task_id) else {
            return false;
        };
        task.set_content(title, description);
        self.notify();
        true
    }

    /// Removes a task by id
    pub fn delete_task(&mut self, board_id: &BoardId, column_id: &ColumnId, task_id: &TaskId) -> bool {
        let Some(column) = self.column_mut(board_id, column_id) else {
            return false;
        };
        let Some(position) = column.task_index(task_id) else {
            return false;
        };
        column.tasks.remove(position);
        self.notify();
        true
    }

    /// Relocates one task, within a column or across columns
    ///
    /// Remove-then-insert semantics: the task is taken out of the source
    /// sequence first, and the destination index addresses the sequence as it
    /// exists after that removal. For a same-column move both indices refer
    /// to the same shrinking-then-growing sequence, which is what makes this
    /// behave like an array move rather than an insert into the original
    /// sequence. The destination index is clamped to the valid insertion
    /// range; an out-of-range source index or any unknown id is a no-op.
    pub fn move_task(
        &mut self,
        board_id: &BoardId,
        source_column_id: &ColumnId,
        dest_column_id: &ColumnId,
        source_index: usize,
        dest_index: usize,
    ) -> bool {
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        let Some(source_pos) = board.column_index(source_column_id) else {
            return false;
        };
        let Some(dest_pos) = board.column_index(dest_column_id) else {
            return false;
        };
        if source_index >= board.columns[source_pos].tasks.len() {
            debug!("move_task rejected: source index {source_index} out of bounds");
            return false;
        }

        if source_pos == dest_pos {
            let tasks = &mut board.columns[source_pos].tasks;
            // After removal the sequence is one shorter; clamp to its
            // insertion range before comparing, so an overshooting index
            // that lands back on the source slot is still a no-op.
            let dest_index = dest_index.min(tasks.len() - 1);
            if dest_index == source_index {
                return false;
            }
            let task = tasks.remove(source_index);
            tasks.insert(dest_index, task);
        } else {
            let task = board.columns[source_pos].tasks.remove(source_index);
            let dest_tasks = &mut board.columns[dest_pos].tasks;
            let dest_index = dest_index.min(dest_tasks.len());
            dest_tasks.insert(dest_index, task);
        }

        self.notify();
        true
    }

    /// Reorders a board's columns
    ///
    /// The column is removed at `source_index` and reinserted at `dest_index`
    /// of the already-shortened sequence, clamped to its bounds. Moving a
    /// column onto its own index is a no-op.
    pub fn move_column(&mut self, board_id: &BoardId, source_index: usize, dest_index: usize) -> bool {
        let Some(board) = self.board_mut(board_id) else {
            return false;
        };
        if source_index >= board.columns.len() {
            debug!("move_column rejected: source index {source_index} out of bounds");
            return false;
        }
        let dest_index = dest_index.min(board.columns.len() - 1);
        if dest_index == source_index {
            return false;
        }
        let column = board.columns.remove(source_index);
        board.columns.insert(dest_index, column);
        self.notify();
        true
    }

    /// Applies a reduced drag instruction
    pub fn apply(&mut self, instruction: MoveInstruction) -> bool {
        match instruction {
            MoveInstruction::Task {
                board_id,
                source_column_id,
                dest_column_id,
                source_index,
                dest_index,
            } => self.move_task(
                &board_id,
                &source_column_id,
                &dest_column_id,
                source_index,
                dest_index,
            ),
            MoveInstruction::Column {
                board_id,
                source_index,
                dest_index,
            } => self.move_column(&board_id, source_index, dest_index),
        }
    }

    fn board_mut(&mut self, board_id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|board| &board.id == board_id)
    }

    fn column_mut(&mut self, board_id: &BoardId, column_id: &ColumnId) -> Option<&mut Column> {
        self.board_mut(board_id)?
            .columns
            .iter_mut()
            .find(|column| &column.id == column_id)
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.boards, self.active_board_id.as_ref());
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}
