use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{ListingId, UserId, listing::ListingRepository},
};

#[async_trait::async_trait]
pub trait DeleteListingUseCase {
    async fn delete(&self, actor: UserId, id: ListingId) -> ServiceResult<()>;
}

pub struct DeleteListingUseCaseImpl<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> DeleteListingUseCaseImpl<L> {
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }
}

#[async_trait::async_trait]
impl<L: ListingRepository + Send + Sync> DeleteListingUseCase for DeleteListingUseCaseImpl<L> {
    async fn delete(&self, actor: UserId, id: ListingId) -> ServiceResult<()> {
        let existing = self
            .listing_repository
            .get_bare(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let Some(existing) = existing else {
            return ServiceError::not_found("Listing not found");
        };
        if existing.seller_id != actor {
            return ServiceError::forbidden("You can only delete your own listings");
        }

        self.listing_repository
            .delete(id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::ListingStatus;
    use crate::mocks::MockListingRepository;

    #[tokio::test]
    async fn non_owner_delete_is_forbidden() {
        let repo = Arc::new(MockListingRepository::default());
        let owner = repo.add_seller("owner");
        let stranger = repo.add_seller("stranger");
        let game = repo.add_game("Valorant");
        let listing = repo.add_listing("mine", game, owner, ListingStatus::Active);

        let use_case = DeleteListingUseCaseImpl::new(repo.clone());
        let err = use_case.delete(stranger, listing).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert!(repo.get_bare(listing).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn owner_delete_removes_the_listing() {
        let repo = Arc::new(MockListingRepository::default());
        let owner = repo.add_seller("owner");
        let game = repo.add_game("Valorant");
        let listing = repo.add_listing("mine", game, owner, ListingStatus::Active);

        let use_case = DeleteListingUseCaseImpl::new(repo.clone());
        use_case.delete(owner, listing).await.unwrap();
        assert!(repo.get_bare(listing).await.unwrap().is_none());
    }
}
