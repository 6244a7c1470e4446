use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::game::{GameRepository, GameWithCategories},
};

#[async_trait::async_trait]
pub trait ListGamesUseCase {
    /// Every game in the catalog, ordered by name, with categories and
    /// listing counts.
    async fn list(&self) -> ServiceResult<Vec<GameWithCategories>>;
}

pub struct ListGamesUseCaseImpl<G: GameRepository> {
    game_repository: Arc<G>,
}

impl<G: GameRepository> ListGamesUseCaseImpl<G> {
    pub fn new(game_repository: Arc<G>) -> Self {
        Self { game_repository }
    }
}

#[async_trait::async_trait]
impl<G: GameRepository + Send + Sync> ListGamesUseCase for ListGamesUseCaseImpl<G> {
    async fn list(&self) -> ServiceResult<Vec<GameWithCategories>> {
        self.game_repository
            .list_all()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}
