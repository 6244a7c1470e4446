use std::collections::HashMap;

use gamebay_server_app::domain::{
    CategoryId, GameId, ListingId, Pagination, UserId,
    category::Category,
    game::Game,
    listing::{
        AdminListingRow, Listing, ListingDetail, ListingFilter, ListingKind, ListingOverview,
        ListingRepoError, ListingRepository, ListingStatus, ListingUpdate, NewListing,
        SellerListing, SellerSummary,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::{
    create_db_pool,
    entity::{category, game, game_category, listing, order, user},
};

pub struct ListingRepositoryImpl {
    db: DatabaseConnection,
}

impl ListingRepositoryImpl {
    pub async fn new() -> Self {
        let db = create_db_pool().await;
        Self { db }
    }

    fn model_to_listing(model: &listing::Model) -> Result<Listing, ListingRepoError> {
        let kind = ListingKind::parse(&model.kind).ok_or_else(|| {
            ListingRepoError::StorageError(format!("unknown listing kind: {}", model.kind))
        })?;
        let status = ListingStatus::parse(&model.status).ok_or_else(|| {
            ListingRepoError::StorageError(format!("unknown listing status: {}", model.status))
        })?;
        Ok(Listing {
            id: ListingId(model.id),
            title: model.title.clone(),
            description: model.description.clone(),
            price: model.price,
            kind,
            status,
            images: serde_json::from_str(&model.images).unwrap_or_default(),
            account_level: model.account_level,
            account_details: model.account_details.clone(),
            key_details: model.key_details.clone(),
            coin_amount: model.coin_amount,
            boosting_from: model.boosting_from.clone(),
            boosting_to: model.boosting_to.clone(),
            coaching_hours: model.coaching_hours,
            game_id: GameId(model.game_id),
            seller_id: UserId(model.seller_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn model_to_game(model: &game::Model) -> Game {
        Game {
            id: GameId(model.id),
            name: model.name.clone(),
            slug: model.slug.clone(),
            description: model.description.clone(),
            image: model.image.clone(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    fn model_to_seller(model: &user::Model) -> SellerSummary {
        SellerSummary {
            id: UserId(model.id),
            username: model.username.clone(),
            name: model.name.clone(),
            image: model.image.clone(),
        }
    }

    async fn games_by_id(
        &self,
        ids: Vec<uuid::Uuid>,
    ) -> Result<HashMap<uuid::Uuid, Game>, ListingRepoError> {
        Ok(game::Entity::find()
            .filter(game::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|m| (m.id, Self::model_to_game(m)))
            .collect())
    }

    async fn sellers_by_id(
        &self,
        ids: Vec<uuid::Uuid>,
    ) -> Result<HashMap<uuid::Uuid, SellerSummary>, ListingRepoError> {
        Ok(user::Entity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|m| (m.id, Self::model_to_seller(m)))
            .collect())
    }

    async fn model_to_detail(
        &self,
        model: listing::Model,
    ) -> Result<ListingDetail, ListingRepoError> {
        let listing = Self::model_to_listing(&model)?;

        let game_model = game::Entity::find_by_id(model.game_id)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .ok_or_else(|| {
                ListingRepoError::StorageError(format!("listing {} has no game", model.id))
            })?;

        let category_ids: Vec<uuid::Uuid> = game_category::Entity::find()
            .filter(game_category::Column::GameId.eq(model.game_id))
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|l| l.category_id)
            .collect();
        let categories = category::Entity::find()
            .filter(category::Column::Id.is_in(category_ids))
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .iter()
            .map(|m| Category {
                id: CategoryId(m.id),
                name: m.name.clone(),
                slug: m.slug.clone(),
                description: m.description.clone(),
                icon: m.icon.clone(),
            })
            .collect();

        let seller_model = user::Entity::find_by_id(model.seller_id)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
            .ok_or_else(|| {
                ListingRepoError::StorageError(format!("listing {} has no seller", model.id))
            })?;

        Ok(ListingDetail {
            listing,
            game: Self::model_to_game(&game_model),
            categories,
            seller: Self::model_to_seller(&seller_model),
        })
    }
}

#[async_trait::async_trait]
impl ListingRepository for ListingRepositoryImpl {
    async fn search(
        &self,
        filter: ListingFilter,
    ) -> Result<Vec<ListingOverview>, ListingRepoError> {
        let mut query = listing::Entity::find();
        if let Some(game_id) = filter.game_id {
            query = query.filter(listing::Column::GameId.eq(game_id.0));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(listing::Column::Kind.eq(kind.as_str()));
        }
        if let Some(seller_id) = filter.seller_id {
            query = query.filter(listing::Column::SellerId.eq(seller_id.0));
        }
        if let Some(status) = filter.status {
            query = query.filter(listing::Column::Status.eq(status.as_str()));
        }

        let models = query
            .order_by_desc(listing::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let games = self
            .games_by_id(models.iter().map(|m| m.game_id).collect())
            .await?;
        let sellers = self
            .sellers_by_id(models.iter().map(|m| m.seller_id).collect())
            .await?;

        let mut result = Vec::with_capacity(models.len());
        for model in &models {
            let (Some(game), Some(seller)) =
                (games.get(&model.game_id), sellers.get(&model.seller_id))
            else {
                continue;
            };
            result.push(ListingOverview {
                listing: Self::model_to_listing(model)?,
                game: game.clone(),
                seller: seller.clone(),
            });
        }
        Ok(result)
    }

    async fn get(&self, id: ListingId) -> Result<Option<ListingDetail>, ListingRepoError> {
        let model = listing::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        match model {
            Some(model) => Ok(Some(self.model_to_detail(model).await?)),
            None => Ok(None),
        }
    }

    async fn get_bare(&self, id: ListingId) -> Result<Option<Listing>, ListingRepoError> {
        let model = listing::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        model.as_ref().map(Self::model_to_listing).transpose()
    }

    async fn create(&self, new_listing: NewListing) -> Result<ListingDetail, ListingRepoError> {
        let images = serde_json::to_string(&new_listing.images)
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let now = chrono::Utc::now();
        let active = listing::ActiveModel {
            id: Set(uuid::Uuid::new_v4()),
            title: Set(new_listing.title),
            description: Set(new_listing.description),
            price: Set(new_listing.price),
            kind: Set(new_listing.kind.as_str().to_string()),
            status: Set(ListingStatus::Active.as_str().to_string()),
            images: Set(images),
            account_level: Set(new_listing.account_level),
            account_details: Set(new_listing.account_details),
            key_details: Set(new_listing.key_details),
            coin_amount: Set(new_listing.coin_amount),
            boosting_from: Set(new_listing.boosting_from),
            boosting_to: Set(new_listing.boosting_to),
            coaching_hours: Set(new_listing.coaching_hours),
            game_id: Set(new_listing.game_id.0),
            seller_id: Set(new_listing.seller_id.0),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let model = active
            .insert(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        self.model_to_detail(model).await
    }

    async fn update(
        &self,
        id: ListingId,
        update: ListingUpdate,
    ) -> Result<Option<ListingDetail>, ListingRepoError> {
        let Some(model) = listing::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        let images = serde_json::to_string(&update.images)
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let mut active: listing::ActiveModel = model.into();
        active.title = Set(update.title);
        active.description = Set(update.description);
        active.price = Set(update.price);
        active.kind = Set(update.kind.as_str().to_string());
        active.images = Set(images);
        active.account_level = Set(update.account_level);
        active.account_details = Set(update.account_details);
        active.key_details = Set(update.key_details);
        active.coin_amount = Set(update.coin_amount);
        active.boosting_from = Set(update.boosting_from);
        active.boosting_to = Set(update.boosting_to);
        active.coaching_hours = Set(update.coaching_hours);
        active.game_id = Set(update.game_id.0);
        active.updated_at = Set(chrono::Utc::now());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        Ok(Some(self.model_to_detail(updated).await?))
    }

    async fn delete(&self, id: ListingId) -> Result<bool, ListingRepoError> {
        let result = listing::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        Ok(result.rows_affected > 0)
    }

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<AdminListingRow>, u64), ListingRepoError> {
        let query = listing::Entity::find().order_by_desc(listing::Column::CreatedAt);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let models = query
            .offset(pagination.offset)
            .limit(pagination.limit)
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let games = self
            .games_by_id(models.iter().map(|m| m.game_id).collect())
            .await?;
        let sellers = self
            .sellers_by_id(models.iter().map(|m| m.seller_id).collect())
            .await?;

        let mut rows = Vec::with_capacity(models.len());
        for model in &models {
            rows.push(AdminListingRow {
                listing: Self::model_to_listing(model)?,
                game_name: games
                    .get(&model.game_id)
                    .map(|g| g.name.clone())
                    .unwrap_or_default(),
                seller_username: sellers
                    .get(&model.seller_id)
                    .map(|s| s.username.clone())
                    .unwrap_or_default(),
            });
        }
        Ok((rows, total))
    }

    async fn set_status(
        &self,
        id: ListingId,
        status: ListingStatus,
    ) -> Result<Option<Listing>, ListingRepoError> {
        let Some(model) = listing::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?
        else {
            return Ok(None);
        };

        let mut active: listing::ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(chrono::Utc::now());
        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
        Ok(Some(Self::model_to_listing(&updated)?))
    }

    async fn active_by_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<SellerListing>, ListingRepoError> {
        let models = listing::Entity::find()
            .filter(listing::Column::SellerId.eq(seller.0))
            .filter(listing::Column::Status.eq(ListingStatus::Active.as_str()))
            .order_by_desc(listing::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;

        let games = self
            .games_by_id(models.iter().map(|m| m.game_id).collect())
            .await?;

        let mut result = Vec::with_capacity(models.len());
        for model in &models {
            let Some(game) = games.get(&model.game_id) else {
                continue;
            };
            let order_count = order::Entity::find()
                .filter(order::Column::ListingId.eq(model.id))
                .count(&self.db)
                .await
                .map_err(|e| ListingRepoError::StorageError(e.to_string()))?;
            result.push(SellerListing {
                listing: Self::model_to_listing(model)?,
                game: game.clone(),
                order_count,
            });
        }
        Ok(result)
    }
}
