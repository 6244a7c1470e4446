//! In-memory repositories backing the workflow tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    CategoryId, GameId, ListingId, Pagination, ReviewId, UserId,
    category::Category,
    game::{Game, GameRepoError, GameRepository, GameUpdate, GameWithCategories, NewGame},
    listing::{
        AdminListingRow, Listing, ListingDetail, ListingFilter, ListingOverview, ListingRepoError,
        ListingRepository, ListingStatus, ListingUpdate, NewListing, SellerListing, SellerSummary,
    },
    review::{Review, ReviewRepoError, ReviewRepository},
    user::{
        ActivityCounts, Credentials, SellerProfile, User, UserRepoError, UserRepository, UserRole,
        UserUpdate,
    },
};

static CLOCK: AtomicI64 = AtomicI64::new(0);

fn next_timestamp() -> chrono::DateTime<Utc> {
    let tick = CLOCK.fetch_add(1, Ordering::Relaxed);
    Utc::now() + Duration::milliseconds(tick)
}

#[derive(Default)]
pub struct MockUserRepository {
    users: Mutex<Vec<User>>,
    passwords: Mutex<HashMap<UserId, String>>,
    profiles: Mutex<HashMap<UserId, SellerProfile>>,
    counts: Mutex<HashMap<UserId, ActivityCounts>>,
}

impl MockUserRepository {
    pub fn add_user(&self, username: &str, email: &str, name: Option<&str>) -> User {
        let now = next_timestamp();
        let user = User {
            id: UserId(Uuid::new_v4()),
            username: username.to_string(),
            email: email.to_string(),
            name: name.map(|n| n.to_string()),
            role: UserRole::User,
            phone_number: None,
            city: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn set_password(&self, id: UserId, plain: &str) {
        let hash = bcrypt::hash(plain, 4).unwrap();
        self.passwords.lock().unwrap().insert(id, hash);
    }
}

#[async_trait::async_trait]
impl UserRepository for MockUserRepository {
    async fn get_user(&self, id: UserId) -> Result<Option<User>, UserRepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, UserRepoError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credentials>, UserRepoError> {
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned();
        Ok(user.and_then(|user| {
            let password_hash = self.passwords.lock().unwrap().get(&user.id).cloned()?;
            Some(Credentials {
                user,
                password_hash,
            })
        }))
    }

    async fn list_users(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<User>, u64), UserRepoError> {
        let users = self.users.lock().unwrap();
        let total = users.len() as u64;
        let items = users
            .iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .cloned()
            .collect();
        Ok((items, total))
    }

    async fn update_user(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<Option<User>, UserRepoError> {
        let mut users = self.users.lock().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = Some(name);
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(phone_number) = update.phone_number {
            user.phone_number = Some(phone_number);
        }
        if let Some(city) = update.city {
            user.city = Some(city);
        }
        user.updated_at = next_timestamp();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: UserId) -> Result<bool, UserRepoError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn get_seller_profile(
        &self,
        user: UserId,
    ) -> Result<Option<SellerProfile>, UserRepoError> {
        Ok(self.profiles.lock().unwrap().get(&user).cloned())
    }

    async fn upsert_seller_profile(
        &self,
        user: UserId,
        display_name: String,
        bio: Option<String>,
    ) -> Result<SellerProfile, UserRepoError> {
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles
            .entry(user)
            .and_modify(|p| {
                p.display_name = display_name.clone();
                if bio.is_some() {
                    p.bio = bio.clone();
                }
            })
            .or_insert_with(|| SellerProfile {
                user_id: user,
                display_name: display_name.clone(),
                bio: bio.clone(),
                rating: 0.0,
                verified: false,
            });
        Ok(profile.clone())
    }

    async fn count_activity(&self, user: UserId) -> Result<ActivityCounts, UserRepoError> {
        Ok(self
            .counts
            .lock()
            .unwrap()
            .get(&user)
            .copied()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct MockGameRepository {
    games: Mutex<Vec<Game>>,
    categories: Mutex<Vec<Category>>,
    associations: Mutex<HashMap<GameId, Vec<CategoryId>>>,
}

impl MockGameRepository {
    pub fn add_category(&self, name: &str) -> CategoryId {
        let category = Category {
            id: CategoryId(Uuid::new_v4()),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            icon: None,
        };
        let id = category.id;
        self.categories.lock().unwrap().push(category);
        id
    }

    pub fn add_game(&self, name: &str, category_ids: &[CategoryId]) -> Game {
        let now = next_timestamp();
        let game = Game {
            id: GameId(Uuid::new_v4()),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        self.associations
            .lock()
            .unwrap()
            .insert(game.id, category_ids.to_vec());
        self.games.lock().unwrap().push(game.clone());
        game
    }

    pub fn associations_of(&self, id: GameId) -> Vec<CategoryId> {
        self.associations
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    fn with_categories(&self, game: Game) -> GameWithCategories {
        let ids = self.associations_of(game.id);
        let categories = self.categories.lock().unwrap();
        GameWithCategories {
            game,
            categories: ids
                .iter()
                .filter_map(|id| categories.iter().find(|c| c.id == *id).cloned())
                .collect(),
            listing_count: 0,
        }
    }
}

#[async_trait::async_trait]
impl GameRepository for MockGameRepository {
    async fn list_all(&self) -> Result<Vec<GameWithCategories>, GameRepoError> {
        let mut games = self.games.lock().unwrap().clone();
        games.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(games
            .into_iter()
            .map(|game| self.with_categories(game))
            .collect())
    }

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<GameWithCategories>, u64), GameRepoError> {
        let games = self.games.lock().unwrap().clone();
        let total = games.len() as u64;
        let items = games
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .map(|game| self.with_categories(game))
            .collect();
        Ok((items, total))
    }

    async fn get(&self, id: GameId) -> Result<Option<GameWithCategories>, GameRepoError> {
        let game = self.games.lock().unwrap().iter().find(|g| g.id == id).cloned();
        Ok(game.map(|game| self.with_categories(game)))
    }

    async fn exists(&self, id: GameId) -> Result<bool, GameRepoError> {
        Ok(self.games.lock().unwrap().iter().any(|g| g.id == id))
    }

    async fn create(
        &self,
        game: NewGame,
        category_ids: &[CategoryId],
    ) -> Result<Game, GameRepoError> {
        let now = next_timestamp();
        let game = Game {
            id: GameId(Uuid::new_v4()),
            name: game.name,
            slug: game.slug,
            description: game.description,
            image: game.image,
            created_at: now,
            updated_at: now,
        };
        self.associations
            .lock()
            .unwrap()
            .insert(game.id, category_ids.to_vec());
        self.games.lock().unwrap().push(game.clone());
        Ok(game)
    }

    async fn update(
        &self,
        id: GameId,
        update: GameUpdate,
        category_ids: Option<&[CategoryId]>,
    ) -> Result<Option<Game>, GameRepoError> {
        let mut games = self.games.lock().unwrap();
        let Some(game) = games.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };
        if let Some(name) = update.name {
            game.name = name;
        }
        if let Some(slug) = update.slug {
            game.slug = slug;
        }
        if let Some(description) = update.description {
            game.description = Some(description);
        }
        if let Some(image) = update.image {
            game.image = Some(image);
        }
        game.updated_at = next_timestamp();
        if let Some(ids) = category_ids {
            self.associations.lock().unwrap().insert(id, ids.to_vec());
        }
        Ok(Some(game.clone()))
    }

    async fn delete(&self, id: GameId) -> Result<bool, GameRepoError> {
        let mut games = self.games.lock().unwrap();
        let before = games.len();
        games.retain(|g| g.id != id);
        self.associations.lock().unwrap().remove(&id);
        Ok(games.len() < before)
    }
}

#[derive(Default)]
pub struct MockListingRepository {
    listings: Mutex<Vec<Listing>>,
    games: Mutex<HashMap<GameId, Game>>,
    sellers: Mutex<HashMap<UserId, SellerSummary>>,
}

impl MockListingRepository {
    pub fn add_seller(&self, username: &str) -> UserId {
        let id = UserId(Uuid::new_v4());
        self.sellers.lock().unwrap().insert(
            id,
            SellerSummary {
                id,
                username: username.to_string(),
                name: None,
                image: None,
            },
        );
        id
    }

    pub fn add_game(&self, name: &str) -> GameId {
        let now = next_timestamp();
        let game = Game {
            id: GameId(Uuid::new_v4()),
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            image: None,
            created_at: now,
            updated_at: now,
        };
        let id = game.id;
        self.games.lock().unwrap().insert(id, game);
        id
    }

    /// Registers a game created elsewhere so joins can resolve it.
    pub fn mirror_game(&self, id: GameId, name: &str) {
        let now = next_timestamp();
        self.games.lock().unwrap().insert(
            id,
            Game {
                id,
                name: name.to_string(),
                slug: name.to_lowercase(),
                description: None,
                image: None,
                created_at: now,
                updated_at: now,
            },
        );
    }

    pub fn add_listing(
        &self,
        title: &str,
        game: GameId,
        seller: UserId,
        status: ListingStatus,
    ) -> ListingId {
        let now = next_timestamp();
        let listing = Listing {
            id: ListingId(Uuid::new_v4()),
            title: title.to_string(),
            description: "description".to_string(),
            price: 10.0,
            kind: crate::domain::listing::ListingKind::Account,
            status,
            images: vec![],
            account_level: None,
            account_details: None,
            key_details: None,
            coin_amount: None,
            boosting_from: None,
            boosting_to: None,
            coaching_hours: None,
            game_id: game,
            seller_id: seller,
            created_at: now,
            updated_at: now,
        };
        let id = listing.id;
        self.listings.lock().unwrap().push(listing);
        id
    }

    fn game_of(&self, id: GameId) -> Game {
        self.games
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .expect("game not mirrored into mock")
    }

    fn seller_of(&self, id: UserId) -> SellerSummary {
        self.sellers
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .expect("seller not registered in mock")
    }
}

#[async_trait::async_trait]
impl ListingRepository for MockListingRepository {
    async fn search(
        &self,
        filter: ListingFilter,
    ) -> Result<Vec<ListingOverview>, ListingRepoError> {
        let mut listings: Vec<Listing> = self
            .listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| filter.game_id.is_none_or(|id| l.game_id == id))
            .filter(|l| filter.kind.is_none_or(|k| l.kind == k))
            .filter(|l| filter.seller_id.is_none_or(|id| l.seller_id == id))
            .filter(|l| filter.status.is_none_or(|s| l.status == s))
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings
            .into_iter()
            .map(|listing| ListingOverview {
                game: self.game_of(listing.game_id),
                seller: self.seller_of(listing.seller_id),
                listing,
            })
            .collect())
    }

    async fn get(&self, id: ListingId) -> Result<Option<ListingDetail>, ListingRepoError> {
        let listing = self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned();
        Ok(listing.map(|listing| ListingDetail {
            game: self.game_of(listing.game_id),
            categories: vec![],
            seller: self.seller_of(listing.seller_id),
            listing,
        }))
    }

    async fn get_bare(&self, id: ListingId) -> Result<Option<Listing>, ListingRepoError> {
        Ok(self
            .listings
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.id == id)
            .cloned())
    }

    async fn create(&self, listing: NewListing) -> Result<ListingDetail, ListingRepoError> {
        let now = next_timestamp();
        let listing = Listing {
            id: ListingId(Uuid::new_v4()),
            title: listing.title,
            description: listing.description,
            price: listing.price,
            kind: listing.kind,
            status: ListingStatus::Active,
            images: listing.images,
            account_level: listing.account_level,
            account_details: listing.account_details,
            key_details: listing.key_details,
            coin_amount: listing.coin_amount,
            boosting_from: listing.boosting_from,
            boosting_to: listing.boosting_to,
            coaching_hours: listing.coaching_hours,
            game_id: listing.game_id,
            seller_id: listing.seller_id,
            created_at: now,
            updated_at: now,
        };
        self.listings.lock().unwrap().push(listing.clone());
        Ok(ListingDetail {
            game: self.game_of(listing.game_id),
            categories: vec![],
            seller: self.seller_of(listing.seller_id),
            listing,
        })
    }

    async fn update(
        &self,
        id: ListingId,
        update: ListingUpdate,
    ) -> Result<Option<ListingDetail>, ListingRepoError> {
        {
            let mut listings = self.listings.lock().unwrap();
            let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
                return Ok(None);
            };
            listing.title = update.title;
            listing.description = update.description;
            listing.price = update.price;
            listing.kind = update.kind;
            listing.game_id = update.game_id;
            listing.images = update.images;
            listing.account_level = update.account_level;
            listing.account_details = update.account_details;
            listing.key_details = update.key_details;
            listing.coin_amount = update.coin_amount;
            listing.boosting_from = update.boosting_from;
            listing.boosting_to = update.boosting_to;
            listing.coaching_hours = update.coaching_hours;
            listing.updated_at = next_timestamp();
        }
        self.get(id).await
    }

    async fn delete(&self, id: ListingId) -> Result<bool, ListingRepoError> {
        let mut listings = self.listings.lock().unwrap();
        let before = listings.len();
        listings.retain(|l| l.id != id);
        Ok(listings.len() < before)
    }

    async fn list_page(
        &self,
        pagination: Pagination,
    ) -> Result<(Vec<AdminListingRow>, u64), ListingRepoError> {
        let listings = self.listings.lock().unwrap().clone();
        let total = listings.len() as u64;
        let rows = listings
            .into_iter()
            .skip(pagination.offset as usize)
            .take(pagination.limit as usize)
            .map(|listing| AdminListingRow {
                game_name: self.game_of(listing.game_id).name,
                seller_username: self.seller_of(listing.seller_id).username,
                listing,
            })
            .collect();
        Ok((rows, total))
    }

    async fn set_status(
        &self,
        id: ListingId,
        status: ListingStatus,
    ) -> Result<Option<Listing>, ListingRepoError> {
        let mut listings = self.listings.lock().unwrap();
        let Some(listing) = listings.iter_mut().find(|l| l.id == id) else {
            return Ok(None);
        };
        listing.status = status;
        listing.updated_at = next_timestamp();
        Ok(Some(listing.clone()))
    }

    async fn active_by_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<SellerListing>, ListingRepoError> {
        let mut listings: Vec<Listing> = self
            .listings
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.seller_id == seller && l.status == ListingStatus::Active)
            .cloned()
            .collect();
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        listings.truncate(limit as usize);
        Ok(listings
            .into_iter()
            .map(|listing| SellerListing {
                game: self.game_of(listing.game_id),
                order_count: 0,
                listing,
            })
            .collect())
    }
}

#[derive(Default)]
pub struct MockReviewRepository {
    reviews: Mutex<Vec<(UserId, Review)>>,
}

impl MockReviewRepository {
    pub fn add_review(&self, seller: UserId, author_username: &str, rating: i32) {
        let author_id = UserId(Uuid::new_v4());
        let review = Review {
            id: ReviewId(Uuid::new_v4()),
            author: SellerSummary {
                id: author_id,
                username: author_username.to_string(),
                name: None,
                image: None,
            },
            rating,
            comment: None,
            created_at: next_timestamp(),
        };
        self.reviews.lock().unwrap().push((seller, review));
    }
}

#[async_trait::async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn recent_for_seller(
        &self,
        seller: UserId,
        limit: u64,
    ) -> Result<Vec<Review>, ReviewRepoError> {
        let mut reviews: Vec<Review> = self
            .reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == seller)
            .map(|(_, r)| r.clone())
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews.truncate(limit as usize);
        Ok(reviews)
    }
}
