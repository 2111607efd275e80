use crate::{
    domain::board::Board,
    error::{KanboardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one JSON blob under a fixed file name
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const KANBOARD_DIR: &'static str = ".kanboard";
    const BOARDS_FILE: &'static str = "boards.json";

    /// Creates a new FileStorage instance rooted at the given directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root_path: root.as_ref().join(Self::KANBOARD_DIR),
        }
    }

    fn boards_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARDS_FILE)
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists().await
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        self.ensure_directory_exists().await?;

        let json = serde_json::to_string_pretty(boards)?;
        fs::write(self.boards_file(), json).await?;

        Ok(())
    }

    async fn load_boards(&self) -> Result<Vec<Board>> {
        let boards_file = self.boards_file();

        if !boards_file.exists() {
            return Err(KanboardError::BoardsNotFound);
        }

        let contents = fs::read_to_string(&boards_file).await?;
        let boards: Vec<Board> = serde_json::from_str(&contents)?;

        Ok(boards)
    }

    async fn is_initialized(&self) -> bool {
        self.boards_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialize_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.initialize().await.unwrap();

        assert!(temp_dir.path().join(".kanboard").exists());
        // No boards have been written yet.
        assert!(!storage.is_initialized().await);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.initialize().await.unwrap();

        let boards = vec![Board::demo(), Board::new("Second")];
        storage.save_boards(&boards).await.unwrap();

        assert!(storage.is_initialized().await);
        let loaded = storage.load_boards().await.unwrap();
        assert_eq!(loaded, boards);
    }

    #[tokio::test]
    async fn test_load_missing_blob() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let result = storage.load_boards().await;
        assert!(matches!(result, Err(KanboardError::BoardsNotFound)));
    }

    #[tokio::test]
    async fn test_load_or_seed_on_first_run() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let boards = storage.load_or_seed().await.unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].title, "My First Board");
    }

    #[tokio::test]
    async fn test_load_or_seed_prefers_persisted_boards() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let boards = vec![Board::new("Mine")];
        storage.save_boards(&boards).await.unwrap();

        let loaded = storage.load_or_seed().await.unwrap();
        assert_eq!(loaded, boards);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_blob() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        storage.save_boards(&[Board::new("First")]).await.unwrap();
        storage.save_boards(&[Board::new("Second")]).await.unwrap();

        let loaded = storage.load_boards().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Second");
    }
}
