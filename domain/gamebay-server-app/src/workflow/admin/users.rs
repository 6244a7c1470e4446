use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        Page, PageRequest, UserId,
        user::{User, UserRepository, UserUpdate},
    },
};

#[async_trait::async_trait]
pub trait AdminUsersUseCase {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<User>>;
    async fn get(&self, id: UserId) -> ServiceResult<Option<User>>;
    async fn update(&self, id: UserId, update: UserUpdate) -> ServiceResult<User>;
    async fn delete(&self, id: UserId) -> ServiceResult<()>;
}

pub struct AdminUsersUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> AdminUsersUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync> AdminUsersUseCase for AdminUsersUseCaseImpl<U> {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<User>> {
        let (users, total) = self
            .user_repository
            .list_users(request.window())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(Page::new(users, request, total))
    }

    async fn get(&self, id: UserId) -> ServiceResult<Option<User>> {
        self.user_repository
            .get_user(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> ServiceResult<User> {
        let updated = self
            .user_repository
            .update_user(id, update)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match updated {
            Some(user) => Ok(user),
            None => ServiceError::not_found("User not found"),
        }
    }

    async fn delete(&self, id: UserId) -> ServiceResult<()> {
        let deleted = self
            .user_repository
            .delete_user(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        if deleted {
            Ok(())
        } else {
            ServiceError::not_found("User not found")
        }
    }
}
