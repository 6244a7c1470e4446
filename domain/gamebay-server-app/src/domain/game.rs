use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{CategoryId, GameId, Pagination, category::Category};

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameWithCategories {
    pub game: Game,
    pub categories: Vec<Category>,
    pub listing_count: u64,
}

#[derive(Clone, Debug)]
pub struct NewGame {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct GameUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum GameRepoError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[async_trait::async_trait]
pub trait GameRepository {
    /// All games ordered by name ascending.
    async fn list_all(&self) -> Result<Vec<GameWithCategories>, GameRepoError>;

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<GameWithCategories>, u64), GameRepoError>;

    async fn get(&self, id: GameId) -> Result<Option<GameWithCategories>, GameRepoError>;

    async fn exists(&self, id: GameId) -> Result<bool, GameRepoError>;

    async fn create(
        &self,
        game: NewGame,
        category_ids: &[CategoryId],
    ) -> Result<Game, GameRepoError>;

    /// Updates the game record. When `category_ids` is `Some`, the whole
    /// category association set is replaced in the same transaction.
    async fn update(
        &self,
        id: GameId,
        update: GameUpdate,
        category_ids: Option<&[CategoryId]>,
    ) -> Result<Option<Game>, GameRepoError>;

    async fn delete(&self, id: GameId) -> Result<bool, GameRepoError>;
}
