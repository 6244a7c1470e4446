use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        GameId, UserId,
        game::GameRepository,
        listing::{ListingDetail, ListingKind, ListingRepository, NewListing},
    },
};

#[derive(Clone, Debug)]
pub struct CreateListingRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub kind: ListingKind,
    pub game_id: GameId,
    pub images: Vec<String>,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
}

#[async_trait::async_trait]
pub trait CreateListingUseCase {
    async fn create(
        &self,
        seller: UserId,
        request: CreateListingRequest,
    ) -> ServiceResult<ListingDetail>;
}

pub struct CreateListingUseCaseImpl<L: ListingRepository, G: GameRepository> {
    listing_repository: Arc<L>,
    game_repository: Arc<G>,
}

impl<L: ListingRepository, G: GameRepository> CreateListingUseCaseImpl<L, G> {
    pub fn new(listing_repository: Arc<L>, game_repository: Arc<G>) -> Self {
        Self {
            listing_repository,
            game_repository,
        }
    }
}

#[async_trait::async_trait]
impl<L, G> CreateListingUseCase for CreateListingUseCaseImpl<L, G>
where
    L: ListingRepository + Send + Sync,
    G: GameRepository + Send + Sync,
{
    async fn create(
        &self,
        seller: UserId,
        request: CreateListingRequest,
    ) -> ServiceResult<ListingDetail> {
        if request.title.trim().is_empty()
            || request.description.trim().is_empty()
            || request.price <= 0.0
        {
            return ServiceError::bad_request("Missing required fields");
        }

        let game_exists = self
            .game_repository
            .exists(request.game_id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        if !game_exists {
            return ServiceError::bad_request("Unknown game");
        }

        self.listing_repository
            .create(NewListing {
                title: request.title,
                description: request.description,
                price: request.price,
                kind: request.kind,
                game_id: request.game_id,
                seller_id: seller,
                images: request.images,
                account_level: request.account_level,
                account_details: request.account_details,
                key_details: request.key_details,
                coin_amount: request.coin_amount,
                boosting_from: request.boosting_from,
                boosting_to: request.boosting_to,
                coaching_hours: request.coaching_hours,
            })
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}
