use crate::domain::task::{BoardId, ColumnId, Task, TaskId};
use serde::{Deserialize, Serialize};

/// A named, ordered list of tasks within a board
///
/// The order of `tasks` is significant: index 0 is the top of the column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column with a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ColumnId::new(),
            title: title.into(),
            tasks: Vec::new(),
        }
    }

    /// Position of a task within this column, by id
    pub fn task_index(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| &task.id == task_id)
    }
}

/// Top-level container of an ordered list of columns
///
/// The order of `columns` is significant: index 0 is the leftmost column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board with no columns and a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: BoardId::new(),
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Looks up a column by id
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == column_id)
    }

    /// Position of a column within this board, by id
    pub fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == column_id)
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|col| col.tasks.len()).sum()
    }

    /// The demo board seeded on first run, when storage holds nothing
    pub fn demo() -> Self {
        let mut todo = Column::new("To Do");
        todo.tasks.push(Task::new(
            "Research competitors",
            "Look at similar products and take notes",
        ));
        todo.tasks.push(Task::new(
            "Sketch wireframes",
            "Create initial wireframes for the main screens",
        ));

        let mut in_progress = Column::new("In Progress");
        in_progress.tasks.push(Task::new(
            "Design user interface",
            "Create UI design based on wireframes",
        ));

        let mut done = Column::new("Done");
        done.tasks.push(Task::new(
            "Project initialization",
            "Set up the project repository and environment",
        ));

        Self {
            id: BoardId::new(),
            title: "My First Board".to_string(),
            columns: vec![todo, in_progress, done],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new("Sprint 12");
        assert_eq!(board.title, "Sprint 12");
        assert!(board.columns.is_empty());
        assert_eq!(board.task_count(), 0);
    }

    #[test]
    fn test_demo_board_shape() {
        let board = Board::demo();
        assert_eq!(board.title, "My First Board");

        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
        assert_eq!(board.task_count(), 4);
    }

    #[test]
    fn test_demo_board_ids_are_unique() {
        let board = Board::demo();

        let column_ids: HashSet<_> = board.columns.iter().map(|c| c.id).collect();
        assert_eq!(column_ids.len(), board.columns.len());

        let task_ids: HashSet<_> = board
            .columns
            .iter()
            .flat_map(|c| c.tasks.iter().map(|t| t.id))
            .collect();
        assert_eq!(task_ids.len(), board.task_count());
    }

    #[test]
    fn test_column_lookup() {
        let board = Board::demo();
        let first = &board.columns[0];

        assert_eq!(board.column(&first.id).map(|c| c.title.as_str()), Some("To Do"));
        assert_eq!(board.column_index(&first.id), Some(0));
        assert!(board.column(&ColumnId::new()).is_none());
    }

    #[test]
    fn test_task_index() {
        let board = Board::demo();
        let todo = &board.columns[0];

        assert_eq!(todo.task_index(&todo.tasks[1].id), Some(1));
        assert_eq!(todo.task_index(&TaskId::new()), None);
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let board = Board::demo();
        let json = serde_json::to_string_pretty(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, board);
    }
}
