use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        UserId,
        user::{ActivityCounts, SellerProfile, User, UserRepository},
    },
};

#[derive(Clone, Debug)]
pub struct ProfileView {
    pub user: User,
    pub seller_profile: Option<SellerProfile>,
    pub counts: ActivityCounts,
}

#[async_trait::async_trait]
pub trait GetProfileUseCase {
    async fn get(&self, user: UserId) -> ServiceResult<ProfileView>;
}

pub struct GetProfileUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> GetProfileUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync> GetProfileUseCase for GetProfileUseCaseImpl<U> {
    async fn get(&self, user_id: UserId) -> ServiceResult<ProfileView> {
        let user = self
            .user_repository
            .get_user(user_id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let Some(user) = user else {
            return ServiceError::not_found("User not found");
        };

        let seller_profile = self
            .user_repository
            .get_seller_profile(user_id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let counts = self
            .user_repository
            .count_activity(user_id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        Ok(ProfileView {
            user,
            seller_profile,
            counts,
        })
    }
}
