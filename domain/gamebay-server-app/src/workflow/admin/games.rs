use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        CategoryId, GameId, Page, PageRequest,
        game::{Game, GameRepository, GameUpdate, GameWithCategories, NewGame},
    },
};

#[async_trait::async_trait]
pub trait AdminGamesUseCase {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<GameWithCategories>>;
    async fn get(&self, id: GameId) -> ServiceResult<Option<GameWithCategories>>;
    async fn create(&self, game: NewGame, category_ids: Vec<CategoryId>) -> ServiceResult<Game>;
    /// When `category_ids` is `Some`, the association set is replaced with
    /// exactly that set.
    async fn update(
        &self,
        id: GameId,
        update: GameUpdate,
        category_ids: Option<Vec<CategoryId>>,
    ) -> ServiceResult<Game>;
    async fn delete(&self, id: GameId) -> ServiceResult<()>;
}

pub struct AdminGamesUseCaseImpl<G: GameRepository> {
    game_repository: Arc<G>,
}

impl<G: GameRepository> AdminGamesUseCaseImpl<G> {
    pub fn new(game_repository: Arc<G>) -> Self {
        Self { game_repository }
    }
}

fn dedupe(ids: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[async_trait::async_trait]
impl<G: GameRepository + Send + Sync> AdminGamesUseCase for AdminGamesUseCaseImpl<G> {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<GameWithCategories>> {
        let (games, total) = self
            .game_repository
            .list_page(request.window())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(Page::new(games, request, total))
    }

    async fn get(&self, id: GameId) -> ServiceResult<Option<GameWithCategories>> {
        self.game_repository
            .get(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn create(&self, game: NewGame, category_ids: Vec<CategoryId>) -> ServiceResult<Game> {
        if game.name.trim().is_empty() || game.slug.trim().is_empty() {
            return ServiceError::bad_request("Missing required fields");
        }
        self.game_repository
            .create(game, &dedupe(category_ids))
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn update(
        &self,
        id: GameId,
        update: GameUpdate,
        category_ids: Option<Vec<CategoryId>>,
    ) -> ServiceResult<Game> {
        let category_ids = category_ids.map(dedupe);
        let updated = self
            .game_repository
            .update(id, update, category_ids.as_deref())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match updated {
            Some(game) => Ok(game),
            None => ServiceError::not_found("Game not found"),
        }
    }

    async fn delete(&self, id: GameId) -> ServiceResult<()> {
        let deleted = self
            .game_repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        if deleted {
            Ok(())
        } else {
            ServiceError::not_found("Game not found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockGameRepository;

    #[tokio::test]
    async fn update_replaces_the_category_set() {
        let repo = Arc::new(MockGameRepository::default());
        let a = repo.add_category("FPS");
        let b = repo.add_category("MOBA");
        let c = repo.add_category("Sports");
        let game = repo.add_game("Valorant", &[a, b]);

        let use_case = AdminGamesUseCaseImpl::new(repo.clone());
        use_case
            .update(game.id, GameUpdate::default(), Some(vec![b, c]))
            .await
            .unwrap();

        assert_eq!(repo.associations_of(game.id), vec![b, c]);
    }

    #[tokio::test]
    async fn empty_set_clears_all_associations() {
        let repo = Arc::new(MockGameRepository::default());
        let a = repo.add_category("FPS");
        let game = repo.add_game("Valorant", &[a]);

        let use_case = AdminGamesUseCaseImpl::new(repo.clone());
        use_case
            .update(game.id, GameUpdate::default(), Some(vec![]))
            .await
            .unwrap();

        assert!(repo.associations_of(game.id).is_empty());
    }

    #[tokio::test]
    async fn absent_set_leaves_associations_untouched() {
        let repo = Arc::new(MockGameRepository::default());
        let a = repo.add_category("FPS");
        let game = repo.add_game("Valorant", &[a]);

        let use_case = AdminGamesUseCaseImpl::new(repo.clone());
        use_case
            .update(game.id, GameUpdate::default(), None)
            .await
            .unwrap();

        assert_eq!(repo.associations_of(game.id), vec![a]);
    }

    #[tokio::test]
    async fn duplicate_ids_are_collapsed() {
        let repo = Arc::new(MockGameRepository::default());
        let a = repo.add_category("FPS");
        let game = repo.add_game("Valorant", &[]);

        let use_case = AdminGamesUseCaseImpl::new(repo.clone());
        use_case
            .update(game.id, GameUpdate::default(), Some(vec![a, a, a]))
            .await
            .unwrap();

        assert_eq!(repo.associations_of(game.id), vec![a]);
    }

    #[tokio::test]
    async fn replace_is_idempotent() {
        let repo = Arc::new(MockGameRepository::default());
        let a = repo.add_category("FPS");
        let b = repo.add_category("MOBA");
        let game = repo.add_game("Valorant", &[]);

        let use_case = AdminGamesUseCaseImpl::new(repo.clone());
        for _ in 0..2 {
            use_case
                .update(game.id, GameUpdate::default(), Some(vec![a, b]))
                .await
                .unwrap();
        }

        assert_eq!(repo.associations_of(game.id), vec![a, b]);
    }
}
