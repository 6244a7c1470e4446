use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{ReviewId, UserId, listing::SellerSummary};

#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: SellerSummary,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error)]
pub enum ReviewRepoError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[async_trait::async_trait]
pub trait ReviewRepository {
    /// Newest reviews left for a seller, with author summaries.
    async fn recent_for_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepoError>;
}
