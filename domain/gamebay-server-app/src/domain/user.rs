use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::UserId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "USER" => Some(UserRole::User),
            "ADMIN" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public-facing seller information attached to a user who sells listings.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerProfile {
    pub user_id: UserId,
    pub display_name: String,
    pub bio: Option<String>,
    pub rating: f64,
    pub verified: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub listings: u64,
    pub orders: u64,
    pub reviews: u64,
}

/// A user together with their stored password hash, for login only.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub user: User,
    pub password_hash: String,
}

/// Field overwrites for the admin user update. `None` leaves a field untouched.
#[derive(Clone, Debug, Default)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Error)]
pub enum UserRepoError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[async_trait::async_trait]
pub trait UserRepository {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserRepoError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, UserRepoError>;

    async fn get_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, UserRepoError>;

    /// Returns one window of users plus the total user count.
    async fn list_users(
        &self,
        pagination: crate::domain::Pagination,
    ) -> Result<(Vec<User>, u64), UserRepoError>;

    async fn update_user(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<Option<User>, UserRepoError>;

    async fn delete_user(&self, id: UserId) -> Result<bool, UserRepoError>;

    async fn get_seller_profile(
        &self,
        user: UserId,
    ) -> Result<Option<SellerProfile>, UserRepoError>;

    async fn upsert_seller_profile(
        &self,
        user: UserId,
        display_name: String,
        bio: Option<String>,
    ) -> Result<SellerProfile, UserRepoError>;

    async fn count_activity(&self, user: UserId) -> Result<ActivityCounts, UserRepoError>;
}
