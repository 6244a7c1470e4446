use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        CategoryId,
        category::{
            Category, CategoryRepository, CategoryUpdate, CategoryWithGameCount, NewCategory,
        },
    },
};

#[async_trait::async_trait]
pub trait AdminCategoriesUseCase {
    /// The category table is small; the admin list is not paginated.
    async fn list(&self) -> ServiceResult<Vec<CategoryWithGameCount>>;
    async fn get(&self, id: CategoryId) -> ServiceResult<Option<Category>>;
    async fn create(&self, category: NewCategory) -> ServiceResult<Category>;
    async fn update(&self, id: CategoryId, update: CategoryUpdate) -> ServiceResult<Category>;
    async fn delete(&self, id: CategoryId) -> ServiceResult<()>;
}

pub struct AdminCategoriesUseCaseImpl<C: CategoryRepository> {
    category_repository: Arc<C>,
}

impl<C: CategoryRepository> AdminCategoriesUseCaseImpl<C> {
    pub fn new(category_repository: Arc<C>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait::async_trait]
impl<C: CategoryRepository + Send + Sync> AdminCategoriesUseCase
    for AdminCategoriesUseCaseImpl<C>
{
    async fn list(&self) -> ServiceResult<Vec<CategoryWithGameCount>> {
        self.category_repository
            .list_all()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn get(&self, id: CategoryId) -> ServiceResult<Option<Category>> {
        self.category_repository
            .get(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn create(&self, category: NewCategory) -> ServiceResult<Category> {
        if category.name.trim().is_empty() || category.slug.trim().is_empty() {
            return ServiceError::bad_request("Missing required fields");
        }
        self.category_repository
            .create(category)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn update(&self, id: CategoryId, update: CategoryUpdate) -> ServiceResult<Category> {
        let updated = self
            .category_repository
            .update(id, update)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match updated {
            Some(category) => Ok(category),
            None => ServiceError::not_found("Category not found"),
        }
    }

    async fn delete(&self, id: CategoryId) -> ServiceResult<()> {
        let deleted = self
            .category_repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        if deleted {
            Ok(())
        } else {
            ServiceError::not_found("Category not found")
        }
    }
}
