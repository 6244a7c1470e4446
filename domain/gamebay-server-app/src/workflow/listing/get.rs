use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        ListingId,
        listing::{ListingDetail, ListingRepository},
    },
};

#[async_trait::async_trait]
pub trait GetListingUseCase {
    async fn get(&self, id: ListingId) -> ServiceResult<ListingDetail>;
}

pub struct GetListingUseCaseImpl<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> GetListingUseCaseImpl<L> {
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }
}

#[async_trait::async_trait]
impl<L: ListingRepository + Send + Sync> GetListingUseCase for GetListingUseCaseImpl<L> {
    async fn get(&self, id: ListingId) -> ServiceResult<ListingDetail> {
        let listing = self
            .listing_repository
            .get(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match listing {
            Some(detail) => Ok(detail),
            None => ServiceError::not_found("Listing not found"),
        }
    }
}
