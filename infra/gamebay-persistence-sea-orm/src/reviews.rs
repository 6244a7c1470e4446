use std::collections::HashMap;

use gamebay_server_app::domain::{
    ReviewId, UserId,
    listing::SellerSummary,
    review::{Review, ReviewRepoError, ReviewRepository},
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    create_db_pool,
    entity::{review, user},
};

pub struct ReviewRepositoryImpl {
    db: DatabaseConnection,
}

impl ReviewRepositoryImpl {
    pub async fn new() -> Self {
        let db = create_db_pool().await;
        Self { db }
    }
}

#[async_trait::async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn recent_for_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepoError> {
        let models = review::Entity::find()
            .filter(review::Column::SellerId.eq(seller.0))
            .order_by_desc(review::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ReviewRepoError::StorageError(e.to_string()))?;

        let authors: HashMap<uuid::Uuid, SellerSummary> = user::Entity::find()
            .filter(user::Column::Id.is_in(models.iter().map(|m| m.author_id).collect::<Vec<_>>()))
            .all(&self.db)
            .await
            .map_err(|e| ReviewRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|m| {
                (
                    m.id,
                    SellerSummary {
                        id: UserId(m.id),
                        username: m.username.clone(),
                        name: m.name.clone(),
                        image: m.image.clone(),
                    },
                )
            })
            .collect();

        Ok(models
            .iter()
            .filter_map(|model| {
                let author = authors.get(&model.author_id)?.clone();
                Some(Review {
                    id: ReviewId(model.id),
                    author,
                    rating: model.rating,
                    comment: model.comment.clone(),
                    created_at: model.created_at,
                })
            })
            .collect())
    }
}
