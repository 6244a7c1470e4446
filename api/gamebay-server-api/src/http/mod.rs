use chrono::{DateTime, Utc};
use gamebay_server_app::domain::{
    category::Category,
    game::Game,
    listing::{Listing, ListingDetail, ListingOverview, SellerListing, SellerSummary},
    review::Review,
    user::{ActivityCounts, SellerProfile, User},
};
use serde::Serialize;

pub mod games;
pub mod listings;
pub mod login;
pub mod profile;
pub mod users;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            slug: category.slug,
            description: category.description,
            icon: category.icon,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummaryDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Game> for GameSummaryDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id.to_string(),
            name: game.name,
            slug: game.slug,
            description: game.description,
            image: game.image,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerDto {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

impl From<SellerSummary> for SellerDto {
    fn from(seller: SellerSummary) -> Self {
        Self {
            id: seller.id.to_string(),
            username: seller.username,
            name: seller.name,
            image: seller.image,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub images: Vec<String>,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
    pub game_id: String,
    pub seller_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<GameSummaryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<SellerDto>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.to_string(),
            title: listing.title,
            description: listing.description,
            price: listing.price,
            kind: listing.kind.as_str().to_string(),
            status: listing.status.as_str().to_string(),
            images: listing.images,
            account_level: listing.account_level,
            account_details: listing.account_details,
            key_details: listing.key_details,
            coin_amount: listing.coin_amount,
            boosting_from: listing.boosting_from,
            boosting_to: listing.boosting_to,
            coaching_hours: listing.coaching_hours,
            game_id: listing.game_id.to_string(),
            seller_id: listing.seller_id.to_string(),
            created_at: listing.created_at,
            updated_at: listing.updated_at,
            game: None,
            categories: None,
            seller: None,
        }
    }
}

impl From<ListingOverview> for ListingDto {
    fn from(overview: ListingOverview) -> Self {
        let mut dto = ListingDto::from(overview.listing);
        dto.game = Some(overview.game.into());
        dto.seller = Some(overview.seller.into());
        dto
    }
}

impl From<ListingDetail> for ListingDto {
    fn from(detail: ListingDetail) -> Self {
        let mut dto = ListingDto::from(detail.listing);
        dto.game = Some(detail.game.into());
        dto.categories = Some(detail.categories.into_iter().map(Into::into).collect());
        dto.seller = Some(detail.seller.into());
        dto
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            email: user.email,
            name: user.name,
            role: user.role.as_str().to_string(),
            phone_number: user.phone_number,
            city: user.city,
            image: user.image,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfileDto {
    pub display_name: String,
    pub bio: Option<String>,
    pub rating: f64,
    pub verified: bool,
}

impl From<SellerProfile> for SellerProfileDto {
    fn from(profile: SellerProfile) -> Self {
        Self {
            display_name: profile.display_name,
            bio: profile.bio,
            rating: profile.rating,
            verified: profile.verified,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsDto {
    pub listings: u64,
    pub orders: u64,
    pub reviews: u64,
}

impl From<ActivityCounts> for CountsDto {
    fn from(counts: ActivityCounts) -> Self {
        Self {
            listings: counts.listings,
            orders: counts.orders,
            reviews: counts.reviews,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerListingDto {
    #[serde(flatten)]
    pub listing: ListingDto,
    pub order_count: u64,
}

impl From<SellerListing> for SellerListingDto {
    fn from(seller_listing: SellerListing) -> Self {
        let mut listing = ListingDto::from(seller_listing.listing);
        listing.game = Some(seller_listing.game.into());
        Self {
            listing,
            order_count: seller_listing.order_count,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub author: SellerDto,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
            author: review.author.into(),
        }
    }
}
