use std::sync::Arc;

use crate::{
    ServiceError, ServiceResult,
    domain::{
        listing::{ListingRepository, SellerListing},
        review::{Review, ReviewRepository},
        user::{ActivityCounts, SellerProfile, User, UserRepository},
    },
};

const RECENT_LISTINGS: u64 = 10;
const RECENT_REVIEWS: u64 = 5;

#[derive(Clone, Debug)]
pub struct PublicProfileView {
    pub user: User,
    pub seller_profile: Option<SellerProfile>,
    pub listings: Vec<SellerListing>,
    pub reviews: Vec<Review>,
    pub counts: ActivityCounts,
    pub average_rating: f64,
}

#[async_trait::async_trait]
pub trait PublicProfileUseCase {
    async fn get(&self, username: &str) -> ServiceResult<PublicProfileView>;
}

pub struct PublicProfileUseCaseImpl<U, L, R>
where
    U: UserRepository,
    L: ListingRepository,
    R: ReviewRepository,
{
    user_repository: Arc<U>,
    listing_repository: Arc<L>,
    review_repository: Arc<R>,
}

impl<U, L, R> PublicProfileUseCaseImpl<U, L, R>
where
    U: UserRepository,
    L: ListingRepository,
    R: ReviewRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        listing_repository: Arc<L>,
        review_repository: Arc<R>,
    ) -> Self {
        Self {
            user_repository,
            listing_repository,
            review_repository,
        }
    }
}

#[async_trait::async_trait]
impl<U, L, R> PublicProfileUseCase for PublicProfileUseCaseImpl<U, L, R>
where
    U: UserRepository + Send + Sync,
    L: ListingRepository + Send + Sync,
    R: ReviewRepository + Send + Sync,
{
    async fn get(&self, username: &str) -> ServiceResult<PublicProfileView> {
        let user = self
            .user_repository
            .get_user_by_username(username)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let Some(user) = user else {
            return ServiceError::not_found("User not found");
        };

        let seller_profile = self
            .user_repository
            .get_seller_profile(user.id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let listings = self
            .listing_repository
            .active_by_seller(user.id, RECENT_LISTINGS)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let reviews = self
            .review_repository
            .recent_for_seller(user.id, RECENT_REVIEWS)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        let counts = self
            .user_repository
            .count_activity(user.id)
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        // Averaged over the recent reviews shown on the page.
        let average_rating = if reviews.is_empty() {
            0.0
        } else {
            reviews.iter().map(|r| r.rating as f64).sum::<f64>() / reviews.len() as f64
        };

        Ok(PublicProfileView {
            user,
            seller_profile,
            listings,
            reviews,
            counts,
            average_rating,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockListingRepository, MockReviewRepository, MockUserRepository};

    #[tokio::test]
    async fn unknown_username_is_not_found() {
        let users = Arc::new(MockUserRepository::default());
        let listings = Arc::new(MockListingRepository::default());
        let reviews = Arc::new(MockReviewRepository::default());

        let use_case = PublicProfileUseCaseImpl::new(users, listings, reviews);
        let err = use_case.get("ghost").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn average_rating_covers_recent_reviews() {
        let users = Arc::new(MockUserRepository::default());
        let listings = Arc::new(MockListingRepository::default());
        let reviews = Arc::new(MockReviewRepository::default());
        let seller = users.add_user("bob", "bob@example.com", None);
        reviews.add_review(seller.id, "alice", 5);
        reviews.add_review(seller.id, "carol", 2);

        let use_case = PublicProfileUseCaseImpl::new(users, listings, reviews);
        let view = use_case.get("bob").await.unwrap();
        assert_eq!(view.reviews.len(), 2);
        assert!((view.average_rating - 3.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn no_reviews_means_zero_rating() {
        let users = Arc::new(MockUserRepository::default());
        let listings = Arc::new(MockListingRepository::default());
        let reviews = Arc::new(MockReviewRepository::default());
        users.add_user("bob", "bob@example.com", None);

        let use_case = PublicProfileUseCaseImpl::new(users, listings, reviews);
        let view = use_case.get("bob").await.unwrap();
        assert_eq!(view.average_rating, 0.0);
    }
}
