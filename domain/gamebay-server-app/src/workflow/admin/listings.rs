use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        ListingId, Page, PageRequest,
        listing::{AdminListingRow, Listing, ListingDetail, ListingRepository, ListingStatus},
    },
};

#[async_trait::async_trait]
pub trait AdminListingsUseCase {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<AdminListingRow>>;
    async fn get(&self, id: ListingId) -> ServiceResult<Option<ListingDetail>>;
    /// Admin edits only touch the status field.
    async fn set_status(&self, id: ListingId, status: ListingStatus) -> ServiceResult<Listing>;
    async fn delete(&self, id: ListingId) -> ServiceResult<()>;
}

pub struct AdminListingsUseCaseImpl<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> AdminListingsUseCaseImpl<L> {
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }
}

#[async_trait::async_trait]
impl<L: ListingRepository + Send + Sync> AdminListingsUseCase for AdminListingsUseCaseImpl<L> {
    async fn list(&self, request: PageRequest) -> ServiceResult<Page<AdminListingRow>> {
        let (rows, total) = self
            .listing_repository
            .list_page(request.window())
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(Page::new(rows, request, total))
    }

    async fn get(&self, id: ListingId) -> ServiceResult<Option<ListingDetail>> {
        self.listing_repository
            .get(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    async fn set_status(&self, id: ListingId, status: ListingStatus) -> ServiceResult<Listing> {
        let updated = self
            .listing_repository
            .set_status(id, status)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        match updated {
            Some(listing) => Ok(listing),
            None => ServiceError::not_found("Listing not found"),
        }
    }

    async fn delete(&self, id: ListingId) -> ServiceResult<()> {
        let deleted = self
            .listing_repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        if deleted {
            Ok(())
        } else {
            ServiceError::not_found("Listing not found")
        }
    }
}
