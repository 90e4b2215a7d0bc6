use crate::{
    config::{BoardConfig, SeedConfig},
    domain::Board,
    error::Result,
    storage::Storage,
    store::BoardSubscriber,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Reads and writes the board under a single storage key
pub struct BoardRepository {
    storage: Arc<dyn Storage>,
    key: String,
    seed: SeedConfig,
}

impl BoardRepository {
    /// Creates a repository for the configured key and seed.
    ///
    /// Fails when the config does not validate: a seed that breaks board
    /// invariants would be saved, rejected on the next load, and replaced.
    pub fn new(storage: Arc<dyn Storage>, config: &BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            storage,
            key: config.storage_key.clone(),
            seed: config.seed.clone(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the stored board, if any. Malformed data is an error.
    pub async fn try_load(&self) -> Result<Option<Board>> {
        match self.storage.get_item(&self.key).await? {
            Some(json) => Ok(Some(Board::from_json(&json)?)),
            None => Ok(None),
        }
    }

    /// Reads the stored board, falling back to the seed board.
    ///
    /// Never fails: unreadable or invalid data is logged and treated as
    /// absent.
    pub async fn load(&self) -> Board {
        match self.try_load().await {
            Ok(Some(board)) => {
                tracing::debug!(
                    key = %self.key,
                    lists = board.list_count(),
                    cards = board.card_count(),
                    "loaded board"
                );
                board
            }
            Ok(None) => {
                tracing::debug!(key = %self.key, "no stored board, using seed");
                Board::seeded(&self.seed)
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "discarding stored board, using seed");
                Board::seeded(&self.seed)
            }
        }
    }

    pub async fn save(&self, board: &Board) -> Result<()> {
        let json = board.to_json()?;
        self.storage.set_item(&self.key, &json).await
    }
}

#[async_trait]
impl BoardSubscriber for BoardRepository {
    fn name(&self) -> &str {
        "persistence"
    }

    async fn board_changed(&self, board: &Board) -> Result<()> {
        self.save(board).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ListId,
        error::KanbanError,
        storage::MemoryStorage,
    };

    fn repository(storage: Arc<dyn Storage>) -> BoardRepository {
        BoardRepository::new(storage, &BoardConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_loads_seed() {
        let repo = repository(Arc::new(MemoryStorage::new()));
        assert_eq!(repo.load().await, Board::seeded(&SeedConfig::default()));
        assert_eq!(repo.try_load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let storage = Arc::new(MemoryStorage::new());
        let repo = repository(storage.clone());

        let mut board = Board::seeded(&SeedConfig::default());
        let review = board.add_list("Review").unwrap();
        board.add_card(&review, "Check numbers").unwrap();
        repo.save(&board).await.unwrap();

        let reopened = repository(storage);
        assert_eq!(reopened.load().await, board);
    }

    #[tokio::test]
    async fn test_malformed_data_loads_same_seed_as_empty_store() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item("kanban-board", r#"[{"id":"l1","title":"To"#)
            .await
            .unwrap();
        let repo = repository(storage);

        assert!(matches!(
            repo.try_load().await,
            Err(KanbanError::SerializationError(_))
        ));
        let fresh = repository(Arc::new(MemoryStorage::new()));
        assert_eq!(repo.load().await, fresh.load().await);
    }

    #[tokio::test]
    async fn test_shape_mismatch_falls_back_to_seed() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set_item("kanban-board", r#"{"lists":"nope"}"#)
            .await
            .unwrap();

        let board = repository(storage).load().await;
        assert_eq!(board, Board::seeded(&SeedConfig::default()));
    }

    #[tokio::test]
    async fn test_cleared_board_stays_empty() {
        let storage = Arc::new(MemoryStorage::new());
        let repo = repository(storage);

        repo.save(&Board::new()).await.unwrap();
        assert!(repo.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_custom_key_and_seed() {
        let storage = Arc::new(MemoryStorage::new());
        let config = BoardConfig::from_toml_str(
            r#"
            storage_key = "team"
            [seed]
            lists = ["Backlog"]
            "#,
        )
        .unwrap();
        let repo = BoardRepository::new(storage.clone(), &config).unwrap();

        let board = repo.load().await;
        assert_eq!(board.lists()[0].id, ListId::from("list-backlog"));

        repo.save(&board).await.unwrap();
        assert!(storage.get_item("team").await.unwrap().is_some());
        assert!(storage.get_item("kanban-board").await.unwrap().is_none());
    }

    #[cfg(feature = "file-storage")]
    #[tokio::test]
    async fn test_file_backed_round_trip() {
        use crate::storage::FileStorage;

        let temp_dir = tempfile::TempDir::new().unwrap();
        let board = {
            let repo = repository(Arc::new(FileStorage::new(temp_dir.path())));
            let mut board = repo.load().await;
            board.clear();
            board.add_list("X").unwrap();
            repo.save(&board).await.unwrap();
            board
        };

        let repo = repository(Arc::new(FileStorage::new(temp_dir.path())));
        assert_eq!(repo.load().await, board);
    }

    #[test]
    fn test_new_rejects_invalid_seed() {
        let mut config = BoardConfig::default();
        config.seed.lists = vec!["Done".to_string(), "done".to_string()];

        let result = BoardRepository::new(Arc::new(MemoryStorage::new()), &config);
        assert!(matches!(result, Err(KanbanError::ConfigError(_))));

        config.seed.lists = vec!["Done".to_string(), " ".to_string()];
        assert!(BoardRepository::new(Arc::new(MemoryStorage::new()), &config).is_err());

        config.seed.lists = vec!["Done".to_string()];
        config.seed.welcome_card = Some("  ".to_string());
        assert!(BoardRepository::new(Arc::new(MemoryStorage::new()), &config).is_err());
    }

    #[tokio::test]
    async fn test_save_reports_quota_errors() {
        let repo = repository(Arc::new(MemoryStorage::with_quota(16)));
        let board = Board::seeded(&SeedConfig::default());

        assert!(matches!(
            repo.save(&board).await,
            Err(KanbanError::QuotaExceeded { .. })
        ));
    }
}
