use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        UserId,
        user::{UserRepository, UserRole},
    },
    util::validate_email,
};

#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    pub role: UserRole,
}

#[async_trait::async_trait]
pub trait LoginUseCase {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<AuthenticatedUser>;
}

pub struct LoginUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> LoginUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync> LoginUseCase for LoginUseCaseImpl<U> {
    async fn login(&self, email: &str, password: &str) -> ServiceResult<AuthenticatedUser> {
        let email = validate_email(email)?;

        let credentials = self
            .user_repository
            .get_credentials_by_email(&email)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let Some(credentials) = credentials else {
            return ServiceError::unauthorized("Invalid email or password");
        };

        let matches = bcrypt::verify(password, &credentials.password_hash)
            .map_err(|e| ServiceError::Internal(format!("Password check failed: {}", e)))?;
        if !matches {
            return ServiceError::unauthorized("Invalid email or password");
        }

        Ok(AuthenticatedUser {
            user_id: credentials.user.id,
            username: credentials.user.username,
            role: credentials.user.role,
        })
    }
}
