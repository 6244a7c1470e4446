use std::sync::Arc;

use gamebay_server_app::domain::{
    Pagination, UserId,
    user::{
        ActivityCounts, Credentials, SellerProfile, User, UserRepoError, UserRepository, UserRole,
        UserUpdate,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    create_db_pool,
    entity::{listing, order, review, seller_profile, user},
};

pub struct UserRepositoryImpl {
    db: DatabaseConnection,
    user_cache: Arc<moka::sync::Cache<UserId, User>>,
}

impl UserRepositoryImpl {
    pub async fn new() -> Self {
        let db = create_db_pool().await;
        let user_cache = Arc::new(
            moka::sync::Cache::builder()
                .max_capacity(10_000)
                .time_to_live(std::time::Duration::from_secs(60 * 5))
                .build(),
        );
        Self { db, user_cache }
    }

    fn model_to_user(model: &user::Model) -> User {
        User {
            id: UserId(model.id),
            username: model.username.clone(),
            email: model.email.clone(),
            name: model.name.clone(),
            role: UserRole::parse(&model.role).unwrap_or(UserRole::User),
            phone_number: model.phone_number.clone(),
            city: model.city.clone(),
            image: model.image.clone(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn model_to_seller_profile(model: &seller_profile::Model) -> SellerProfile {
        SellerProfile {
            user_id: UserId(model.user_id),
            display_name: model.display_name.clone(),
            bio: model.bio.clone(),
            rating: model.rating,
            verified: model.verified,
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserRepoError> {
        if let Some(cached) = self.user_cache.get(&id) {
            return Ok(Some(cached));
        }

        let model = user::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        Ok(model.map(|model| {
            let user = Self::model_to_user(&model);
            self.user_cache.insert(id, user.clone());
            user
        }))
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, UserRepoError> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        Ok(model.map(|model| Self::model_to_user(&model)))
    }

    async fn get_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, UserRepoError> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        Ok(model.map(|model| Credentials {
            user: Self::model_to_user(&model),
            password_hash: model.password_hash,
        }))
    }

    async fn list_users(&self, pagination: Pagination) -> Result<(Vec<User>, u64), UserRepoError> {
        let query = user::Entity::find().order_by_desc(user::Column::CreatedAt);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        let models = query
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        Ok((models.iter().map(Self::model_to_user).collect(), total))
    }

    async fn update_user(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<Option<User>, UserRepoError> {
        let Some(model) = user::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = model.into();
        if let Some(username) = update.username {
            active.username = Set(username);
        }
        if let Some(email) = update.email {
            active.email = Set(email);
        }
        if let Some(name) = update.name {
            active.name = Set(Some(name));
        }
        if let Some(role) = update.role {
            active.role = Set(role.as_str().to_string());
        }
        if let Some(phone_number) = update.phone_number {
            active.phone_number = Set(Some(phone_number));
        }
        if let Some(city) = update.city {
            active.city = Set(Some(city));
        }
        active.updated_at = Set(chrono::Utc::now());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        self.user_cache.invalidate(&id);
        Ok(Some(Self::model_to_user(&updated)))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, UserRepoError> {
        let result = user::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        self.user_cache.invalidate(&id);
        Ok(result.rows_affected > 0)
    }

    async fn get_seller_profile(
        &self,
        user: UserId,
    ) -> Result<Option<SellerProfile>, UserRepoError> {
        let model = seller_profile::Entity::find_by_id(user.0)
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        Ok(model.map(|model| Self::model_to_seller_profile(&model)))
    }

    async fn upsert_seller_profile(
        &self,
        user: UserId,
        display_name: String,
        bio: Option<String>,
    ) -> Result<SellerProfile, UserRepoError> {
        let existing = seller_profile::Entity::find_by_id(user.0)
            .one(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        let model = match existing {
            Some(model) => {
                let mut active: seller_profile::ActiveModel = model.into();
                active.display_name = Set(display_name);
                if bio.is_some() {
                    active.bio = Set(bio);
                }
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| UserRepoError::StorageError(e.to_string()))?
            }
            None => {
                let active = seller_profile::ActiveModel {
                    user_id: Set(user.0),
                    display_name: Set(display_name),
                    bio: Set(bio),
                    rating: Set(0.0),
                    verified: Set(false),
                };
                active
                    .insert(&self.db)
                    .await
                    .map_err(|e| UserRepoError::StorageError(e.to_string()))?
            }
        };

        Ok(Self::model_to_seller_profile(&model))
    }

    async fn count_activity(&self, user: UserId) -> Result<ActivityCounts, UserRepoError> {
        let listings = listing::Entity::find()
            .filter(listing::Column::SellerId.eq(user.0))
            .count(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        let orders = order::Entity::find()
            .filter(order::Column::SellerId.eq(user.0))
            .count(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;
        let reviews = review::Entity::find()
            .filter(review::Column::SellerId.eq(user.0))
            .count(&self.db)
            .await
            .map_err(|e| UserRepoError::StorageError(e.to_string()))?;

        Ok(ActivityCounts {
            listings,
            orders,
            reviews,
        })
    }
}
