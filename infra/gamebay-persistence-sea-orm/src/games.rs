use std::collections::HashMap;

use gamebay_server_app::domain::{
    CategoryId, GameId, Pagination,
    category::Category,
    game::{Game, GameRepoError, GameRepository, GameUpdate, GameWithCategories, NewGame},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    create_db_pool,
    entity::{category, game, game_category, listing},
};

pub struct GameRepositoryImpl {
    db: DatabaseConnection,
}

impl GameRepositoryImpl {
    pub async fn new() -> Self {
        let db = create_db_pool().await;
        Self { db }
    }

    fn model_to_game(model: &game::Model) -> Game {
        Game {
            id: GameId(model.id),
            name: model.name.clone(),
            slug: model.slug.clone(),
            description: model.description.clone(),
            image: model.image.clone(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn model_to_category(model: &category::Model) -> Category {
        Category {
            id: CategoryId(model.id),
            name: model.name.clone(),
            slug: model.slug.clone(),
            description: model.description.clone(),
            icon: model.icon.clone(),
        }
    }

    /// Attaches categories and listing counts to a batch of game rows.
    async fn enrich(
        &self,
        models: Vec<game::Model>,
    ) -> Result<Vec<GameWithCategories>, GameRepoError> {
        let game_ids: Vec<uuid::Uuid> = models.iter().map(|m| m.id).collect();

        let links = game_category::Entity::find()
            .filter(game_category::Column::GameId.is_in(game_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        let category_ids: Vec<uuid::Uuid> = links.iter().map(|l| l.category_id).collect();
        let categories: HashMap<uuid::Uuid, Category> = category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|m| (m.id, Self::model_to_category(m)))
            .collect();

        let mut categories_by_game: HashMap<uuid::Uuid, Vec<Category>> = HashMap::new();
        for link in links {
            if let Some(cat) = categories.get(&link.category_id) {
                categories_by_game
                    .entry(link.game_id)
                    .or_default()
                    .push(cat.clone());
            }
        }

        let mut result = Vec::with_capacity(models.len());
        for model in models {
            let listing_count = listing::Entity::find()
                .filter(listing::Column::GameId.eq(model.id))
                .count(&self.db)
                .await
                .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
            result.push(GameWithCategories {
                categories: categories_by_game.remove(&model.id).unwrap_or_default(),
                listing_count,
                game: Self::model_to_game(&model),
            });
        }
        Ok(result)
    }
}

#[async_trait::async_trait]
impl GameRepository for GameRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<GameWithCategories>, GameRepoError> {
        let models = game::Entity::find()
            .order_by_asc(game::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        self.enrich(models).await
    }

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<GameWithCategories>, u64), GameRepoError> {
        let query = game::Entity::find().order_by_desc(game::Column::CreatedAt);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        let models = query
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        Ok((self.enrich(models).await?, total))
    }

    async fn get(&self, id: GameId) -> Result<Option<GameWithCategories>, GameRepoError> {
        let model = game::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        match model {
            Some(model) => Ok(self.enrich(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn exists(&self, id: GameId) -> Result<bool, GameRepoError> {
        let count = game::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        Ok(count > 0)
    }

    async fn create(
        &self,
        new_game: NewGame,
        category_ids: &[CategoryId],
    ) -> Result<Game, GameRepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        let now = chrono::Utc::now();
        let active = game::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(new_game.name),
            slug: Set(new_game.slug),
            description: Set(new_game.description),
            image: Set(new_game.image),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active
            .insert(&txn)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        if !category_ids.is_empty() {
            let links = category_ids.iter().map(|cat| game_category::ActiveModel {
                game_id: Set(model.id),
                category_id: Set(cat.0),
            });
            game_category::Entity::insert_many(links)
                .exec(&txn)
                .await
                .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        }

        txn.commit()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        Ok(Self::model_to_game(&model))
    }

    async fn update(
        &self,
        id: GameId,
        update: GameUpdate,
        category_ids: Option<&[CategoryId]>,
    ) -> Result<Option<Game>, GameRepoError> {
        let Some(model) = game::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        // The field update and the association replace commit together, so a
        // failed replace never leaves a half-updated game behind.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        let mut active: game::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(slug) = update.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(image) = update.image {
            active.image = Set(Some(image));
        }
        active.updated_at = Set(chrono::Utc::now());
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        if let Some(category_ids) = category_ids {
            game_category::Entity::delete_many()
                .filter(game_category::Column::GameId.eq(id.0))
                .exec(&txn)
                .await
                .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

            if !category_ids.is_empty() {
                let links = category_ids.iter().map(|cat| game_category::ActiveModel {
                    game_id: Set(id.0),
                    category_id: Set(cat.0),
                });
                game_category::Entity::insert_many(links)
                    .exec(&txn)
                    .await
                    .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        Ok(Some(Self::model_to_game(&updated)))
    }

    async fn delete(&self, id: GameId) -> Result<bool, GameRepoError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        game_category::Entity::delete_many()
            .filter(game_category::Column::GameId.eq(id.0))
            .exec(&txn)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        let result = game::Entity::delete_by_id(id.0)
            .exec(&txn)
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| GameRepoError::StorageError(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
