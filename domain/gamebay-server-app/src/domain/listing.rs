use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    GameId, ListingId, Pagination, UserId,
    category::Category,
    game::Game,
};

/// The kind of thing a listing sells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingKind {
    Account,
    Key,
    TopUp,
    Boosting,
    Coaching,
    Item,
}

impl ListingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingKind::Account => "ACCOUNT",
            ListingKind::Key => "KEY",
            ListingKind::TopUp => "TOP_UP",
            ListingKind::Boosting => "BOOSTING",
            ListingKind::Coaching => "COACHING",
            ListingKind::Item => "ITEM",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACCOUNT" => Some(ListingKind::Account),
            "KEY" => Some(ListingKind::Key),
            "TOP_UP" => Some(ListingKind::TopUp),
            "BOOSTING" => Some(ListingKind::Boosting),
            "COACHING" => Some(ListingKind::Coaching),
            "ITEM" => Some(ListingKind::Item),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingStatus {
    Active,
    Paused,
    Sold,
    Deleted,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Active => "ACTIVE",
            ListingStatus::Paused => "PAUSED",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Deleted => "DELETED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ACTIVE" => Some(ListingStatus::Active),
            "PAUSED" => Some(ListingStatus::Paused),
            "SOLD" => Some(ListingStatus::Sold),
            "DELETED" => Some(ListingStatus::Deleted),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub kind: ListingKind,
    pub status: ListingStatus,
    pub images: Vec<String>,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
    pub game_id: GameId,
    pub seller_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The slice of a user shown next to their listings and reviews.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerSummary {
    pub id: UserId,
    pub username: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingOverview {
    pub listing: Listing,
    pub game: Game,
    pub seller: SellerSummary,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListingDetail {
    pub listing: Listing,
    pub game: Game,
    pub categories: Vec<Category>,
    pub seller: SellerSummary,
}

/// A listing row on a public seller profile.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerListing {
    pub listing: Listing,
    pub game: Game,
    pub order_count: u64,
}

/// A listing row in the admin table.
#[derive(Clone, Debug, PartialEq)]
pub struct AdminListingRow {
    pub listing: Listing,
    pub game_name: String,
    pub seller_username: String,
}

#[derive(Clone, Debug, Default)]
pub struct ListingFilter {
    pub game_id: Option<GameId>,
    pub kind: Option<ListingKind>,
    pub seller_id: Option<UserId>,
    pub status: Option<ListingStatus>,
}

#[derive(Clone, Debug)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub kind: ListingKind,
    pub game_id: GameId,
    pub seller_id: UserId,
    pub images: Vec<String>,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
}

/// Full overwrite of the mutable listing fields, as the seller PUT does.
#[derive(Clone, Debug)]
pub struct ListingUpdate {
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

#[derive(Debug, Clone, Error)]
pub enum ListingRepoError {
    #[error("storage error: {0}")]
    StorageError(String),
}

#[async_trait::async_trait]
pub trait ListingRepository {
    /// Listings matching the filter, newest first.
    async fn search(&self, filter: ListingFilter) -> Result<Vec<ListingOverview>, ListingRepoError>;

    async fn get(&self, id: ListingId) -> Result<Option<ListingDetail>, ListingRepoError>;

    /// The bare record without joins, used for ownership checks.
    async fn get_bare(&self, id: ListingId) -> Result<Option<Listing>, ListingRepoError>;

    async fn create(&self, listing: NewListing) -> Result<ListingDetail, ListingRepoError>;

    async fn update(
        &self,
        id: ListingId,
        update: ListingUpdate,
    ) -> Result<Option<ListingDetail>, ListingRepoError>;

    async fn delete(&self, id: ListingId) -> Result<bool, ListingRepoError>;

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<AdminListingRow>, u64), ListingRepoError>;

    async fn set_status(
        &self,
        id: ListingId,
        status: ListingStatus,
    ) -> Result<Option<Listing>, ListingRepoError>;

    /// Newest active listings of one seller, with per-listing order counts.
    async fn active_by_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<SellerListing>, ListingRepoError>;
}
