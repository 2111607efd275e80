use crate::{
    domain::board::Board,
    error::{KanboardError, Result},
};
use async_trait::async_trait;
use log::info;

#[cfg(feature = "file-storage")]
pub mod file_storage;

pub mod memory;

/// Storage trait for persisting the full board set
///
/// The persisted value is one opaque blob holding every board; there is no
/// per-entity addressing, no schema versioning and no migration. A read
/// returns the last written value, or [`KanboardError::BoardsNotFound`] on
/// first run.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Overwrites the persisted blob with the given boards
    async fn save_boards(&self, boards: &[Board]) -> Result<()>;

    /// Loads the last persisted board set
    async fn load_boards(&self) -> Result<Vec<Board>>;

    /// Checks if a board set has been persisted
    async fn is_initialized(&self) -> bool;

    /// Loads the persisted board set, seeding the demo board on first run
    async fn load_or_seed(&self) -> Result<Vec<Board>> {
        match self.load_boards().await {
            Ok(boards) => Ok(boards),
            Err(KanboardError::BoardsNotFound) => {
                info!("no persisted boards found, seeding the demo board");
                Ok(vec![Board::demo()])
            }
            Err(err) => Err(err),
        }
    }
}
