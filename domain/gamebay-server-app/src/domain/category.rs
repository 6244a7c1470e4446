use thiserror::Error;

use crate::domain::CategoryId;

#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryWithGameCount {
    pub category: Category,
    pub game_count: u64,
}

#[derive(Clone, Debug)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum CategoryRepoError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[async_trait::async_trait]
pub trait CategoryRepository {
    async fn list_all(&self) -> Result<Vec<CategoryWithGameCount>, CategoryRepoError>;

    async fn get(&self, id: CategoryId) -> Result<Option<Category>, CategoryRepoError>;

    async fn create(&self, category: NewCategory) -> Result<Category, CategoryRepoError>;

    async fn update(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Option<Category>, CategoryRepoError>;

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryRepoError>;
}
