use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        ListingId, UserId,
        listing::{ListingDetail, ListingRepository, ListingUpdate},
    },
};

#[async_trait::async_trait]
pub trait UpdateListingUseCase {
    /// Overwrites the mutable fields of a listing. Only the seller may do
    /// this.
    async fn update(
        &self,
        actor: UserId,
        id: ListingId,
        update: ListingUpdate,
    ) -> ServiceResult<ListingDetail>;
}

pub struct UpdateListingUseCaseImpl<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> UpdateListingUseCaseImpl<L> {
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }
}

#[async_trait::async_trait]
impl<L: ListingRepository + Send + Sync> UpdateListingUseCase for UpdateListingUseCaseImpl<L> {
    async fn update(
        &self,
        actor: UserId,
        id: ListingId,
        update: ListingUpdate,
    ) -> ServiceResult<ListingDetail> {
        let existing = self
            .listing_repository
            .get_bare(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let Some(existing) = existing else {
            return ServiceError::not_found("Listing not found");
        };
        if existing.seller_id != actor {
            return ServiceError::forbidden("You can only edit your own listings");
        }

        let updated = self
            .listing_repository
            .update(id, update)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match updated {
            Some(detail) => Ok(detail),
            None => ServiceError::not_found("Listing not found"),
        }
    }
}
