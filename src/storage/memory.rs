use crate::{
    domain::board::Board,
    error::{KanboardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-memory storage backend for tests and embedded use
///
/// Holds the serialized blob rather than the boards themselves, so loads
/// exercise the same serde path the file backend does.
#[derive(Default)]
pub struct MemoryStorage {
    blob: RwLock<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    async fn save_boards(&self, boards: &[Board]) -> Result<()> {
        let json = serde_json::to_string(boards)?;
        *self.blob.write().await = Some(json);
        Ok(())
    }

    async fn load_boards(&self) -> Result<Vec<Board>> {
        let blob = self.blob.read().await;
        let json = blob.as_deref().ok_or(KanboardError::BoardsNotFound)?;
        Ok(serde_json::from_str(json)?)
    }

    async fn is_initialized(&self) -> bool {
        self.blob.read().await.is_some()
    }
}
