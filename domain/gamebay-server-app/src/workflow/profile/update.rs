use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        UserId,
        user::{User, UserRepository, UserUpdate},
    },
};

#[derive(Clone, Debug, Default)]
pub struct ProfileUpdateRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

#[async_trait::async_trait]
pub trait UpdateProfileUseCase {
    /// Updates the basic user fields. When a display name or bio is
    /// supplied the seller profile is created or updated alongside.
    async fn update(&self, user: UserId, request: ProfileUpdateRequest) -> ServiceResult<User>;
}

pub struct UpdateProfileUseCaseImpl<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UpdateProfileUseCaseImpl<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait::async_trait]
impl<U: UserRepository + Send + Sync> UpdateProfileUseCase for UpdateProfileUseCaseImpl<U> {
    async fn update(&self, user_id: UserId, request: ProfileUpdateRequest) -> ServiceResult<User> {
        let updated = self
            .user_repository
            .update_user(
                user_id,
                UserUpdate {
                    name: request.name.clone(),
                    phone_number: request.phone_number,
                    city: request.city,
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let Some(updated) = updated else {
            return ServiceError::not_found("User not found");
        };

        if request.display_name.is_some() || request.bio.is_some() {
            let display_name = request
                .display_name
                .or(request.name)
                .or_else(|| updated.name.clone())
                .unwrap_or_else(|| updated.username.clone());
            self.user_repository
                .upsert_seller_profile(user_id, display_name, request.bio)
                .await
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
        }

        Ok(updated)
    }
}
