use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        GameId, UserId,
        listing::{ListingFilter, ListingKind, ListingOverview, ListingRepository, ListingStatus},
    },
};

/// The storefront filter. Status is not a caller choice: browsing only ever
/// sees active listings.
#[derive(Clone, Debug, Default)]
pub struct BrowseFilter {
    pub game_id: Option<GameId>,
    pub kind: Option<ListingKind>,
    pub seller_id: Option<UserId>,
}

#[async_trait::async_trait]
pub trait BrowseListingsUseCase {
    async fn browse(&self, filter: BrowseFilter) -> ServiceResult<Vec<ListingOverview>>;
}

pub struct BrowseListingsUseCaseImpl<L: ListingRepository> {
    listing_repository: Arc<L>,
}

impl<L: ListingRepository> BrowseListingsUseCaseImpl<L> {
    pub fn new(listing_repository: Arc<L>) -> Self {
        Self { listing_repository }
    }
}

#[async_trait::async_trait]
impl<L: ListingRepository + Send + Sync> BrowseListingsUseCase for BrowseListingsUseCaseImpl<L> {
    async fn browse(&self, filter: BrowseFilter) -> ServiceResult<Vec<ListingOverview>> {
        self.listing_repository
            .search(ListingFilter {
                game_id: filter.game_id,
                kind: filter.kind,
                seller_id: filter.seller_id,
                status: Some(ListingStatus::Active),
            })
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockListingRepository;

    #[tokio::test]
    async fn browse_only_returns_active_listings() {
        let repo = Arc::new(MockListingRepository::default());
        let seller = repo.add_seller("bob");
        let game = repo.add_game("Valorant");
        repo.add_listing("active one", game, seller, ListingStatus::Active);
        repo.add_listing("paused one", game, seller, ListingStatus::Paused);

        let use_case = BrowseListingsUseCaseImpl::new(repo);
        let listings = use_case.browse(BrowseFilter::default()).await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].listing.title, "active one");
    }
}
