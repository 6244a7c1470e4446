use std::collections::HashMap;

use gamebay_server_app::domain::{
    CategoryId,
    category::{
        Category, CategoryRepoError, CategoryRepository, CategoryUpdate, CategoryWithGameCount,
        NewCategory,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    create_db_pool,
    entity::{category, game_category},
};

pub struct CategoryRepositoryImpl {
    db: DatabaseConnection,
}

impl CategoryRepositoryImpl {
    pub async fn new() -> Self {
        let db = create_db_pool().await;
        Self { db }
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
}

#[async_trait::async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<CategoryWithGameCount>, CategoryRepoError> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;

        // The link table is small enough to count in one pass.
        let links = game_category::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;
        let mut counts: HashMap<uuid::Uuid, u64> = HashMap::new();
        for link in links {
            *counts.entry(link.category_id).or_default() += 1;
        }

        Ok(models
            .iter()
            .map(|model| CategoryWithGameCount {
                category: Self::model_to_category(model),
                game_count: counts.get(&model.id).copied().unwrap_or(0),
            })
            .collect())
    }

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepoError> {
        let model = category::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;
        Ok(model.map(|model| Self::model_to_category(&model)))
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryRepoError> {
        let active = category::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            name: Set(new_category.name),
            slug: Set(new_category.slug),
            description: Set(new_category.description),
            icon: Set(new_category.icon),
        };
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;
        Ok(Self::model_to_category(&model))
    }

    async fn update(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Option<Category>, CategoryRepoError> {
        let Some(model) = category::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: category::ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(slug) = update.slug {
            active.slug = Set(slug);
        }
        if let Some(description) = update.description {
            active.description = Set(Some(description));
        }
        if let Some(icon) = update.icon {
            active.icon = Set(Some(icon));
        }
        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;
        Ok(Some(Self::model_to_category(&updated)))
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryRepoError> {
        game_category::Entity::delete_many()
            .filter(game_category::Column::CategoryId.eq(id.0))
            .exec(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;

        let result = category::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| CategoryRepoError::StorageError(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }
}
