use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use gamebay_server_app::{
    build_application,
    domain::{
        CategoryId, GameId, ListingId, Pagination, UserId,
        category::{
            Category, CategoryRepoError, CategoryRepository, CategoryUpdate,
            CategoryWithGameCount, NewCategory,
        },
        game::{Game, GameRepoError, GameRepository, GameUpdate, GameWithCategories, NewGame},
        listing::{
            AdminListingRow, Listing, ListingDetail, ListingFilter, ListingOverview,
            ListingRepoError, ListingRepository, ListingStatus, ListingUpdate, NewListing,
            SellerListing,
        },
        review::{Review, ReviewRepoError, ReviewRepository},
        user::{
            ActivityCounts, Credentials, SellerProfile, User, UserRepoError, UserRepository,
            UserRole, UserUpdate,
        },
    },
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::{build_router, jwt};

struct EmptyUserRepository;

#[async_trait::async_trait]
impl UserRepository for EmptyUserRepository {
    async fn get_user(&self, _id: UserId) -> Result<Option<User>, UserRepoError> {
        Ok(None)
    }

    async fn get_user_by_username(&self, _username: &str) -> Result<Option<User>, UserRepoError> {
        Ok(None)
    }

    async fn get_credentials_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<Credentials>, UserRepoError> {
        Ok(None)
    }

    async fn list_users(&self, _pagination: Pagination) -> Result<(Vec<User>, u64), UserRepoError> {
        Ok((vec![], 0))
    }

    async fn update_user(
        &self,
        _id: UserId,
        _update: UserUpdate,
    ) -> Result<Option<User>, UserRepoError> {
        Ok(None)
    }

    async fn delete_user(&self, _id: UserId) -> Result<bool, UserRepoError> {
        Ok(false)
    }

    async fn get_seller_profile(
        &self,
        _user: UserId,
    ) -> Result<Option<SellerProfile>, UserRepoError> {
        Ok(None)
    }

    async fn upsert_seller_profile(
        &self,
        _user: UserId,
        _display_name: String,
        _bio: Option<String>,
    ) -> Result<SellerProfile, UserRepoError> {
        Err(UserRepoError::StorageError("no storage".to_string()))
    }

    async fn count_activity(&self, _user: UserId) -> Result<ActivityCounts, UserRepoError> {
        Ok(ActivityCounts::default())
    }
}

struct EmptyGameRepository;

#[async_trait::async_trait]
impl GameRepository for EmptyGameRepository {
    async fn list_all(&self) -> Result<Vec<GameWithCategories>, GameRepoError> {
        Ok(vec![])
    }

    async fn list_page(
        &self,
        _pagination: Pagination,
    ) -> Result<(Vec<GameWithCategories>, u64), GameRepoError> {
        Ok((vec![], 0))
    }

    async fn get(&self, _id: GameId) -> Result<Option<GameWithCategories>, GameRepoError> {
        Ok(None)
    }

    async fn exists(&self, _id: GameId) -> Result<bool, GameRepoError> {
        Ok(false)
    }

    async fn create(
        &self,
        _game: NewGame,
        _category_ids: &[CategoryId],
    ) -> Result<Game, GameRepoError> {
        Err(GameRepoError::StorageError("no storage".to_string()))
    }

    async fn update(
        &self,
        _id: GameId,
        _update: GameUpdate,
        _category_ids: Option<&[CategoryId]>,
    ) -> Result<Option<Game>, GameRepoError> {
        Ok(None)
    }

    async fn delete(&self, _id: GameId) -> Result<bool, GameRepoError> {
        Ok(false)
    }
}

struct EmptyCategoryRepository;

#[async_trait::async_trait]
impl CategoryRepository for EmptyCategoryRepository {
    async fn list_all(&self) -> Result<Vec<CategoryWithGameCount>, CategoryRepoError> {
        Ok(vec![])
    }

    async fn get(&self, _id: CategoryId) -> Result<Option<Category>, CategoryRepoError> {
        Ok(None)
    }

    async fn create(&self, _category: NewCategory) -> Result<Category, CategoryRepoError> {
        Err(CategoryRepoError::StorageError("no storage".to_string()))
    }

    async fn update(
        &self,
        _id: CategoryId,
        _update: CategoryUpdate,
    ) -> Result<Option<Category>, CategoryRepoError> {
        Ok(None)
    }

    async fn delete(&self, _id: CategoryId) -> Result<bool, CategoryRepoError> {
        Ok(false)
    }
}

struct EmptyListingRepository;

#[async_trait::async_trait]
impl ListingRepository for EmptyListingRepository {
    async fn search(
        &self,
        _filter: ListingFilter,
    ) -> Result<Vec<ListingOverview>, ListingRepoError> {
        Ok(vec![])
    }

    async fn get(&self, _id: ListingId) -> Result<Option<ListingDetail>, ListingRepoError> {
        Ok(None)
    }

    async fn get_bare(&self, _id: ListingId) -> Result<Option<Listing>, ListingRepoError> {
        Ok(None)
    }

    async fn create(&self, _listing: NewListing) -> Result<ListingDetail, ListingRepoError> {
        Err(ListingRepoError::StorageError("no storage".to_string()))
    }

    async fn update(
        &self,
        _id: ListingId,
        _update: ListingUpdate,
    ) -> Result<Option<ListingDetail>, ListingRepoError> {
        Ok(None)
    }

    async fn delete(&self, _id: ListingId) -> Result<bool, ListingRepoError> {
        Ok(false)
    }

    async fn list_page(
        &self,
        _pagination: Pagination,
    ) -> Result<(Vec<AdminListingRow>, u64), ListingRepoError> {
        Ok((vec![], 0))
    }

    async fn set_status(
        &self,
        _id: ListingId,
        _status: ListingStatus,
    ) -> Result<Option<Listing>, ListingRepoError> {
        Ok(None)
    }

    async fn active_by_seller(
        &self,
        _seller: UserId,
        _limit: u64,
    ) -> Result<Vec<SellerListing>, ListingRepoError> {
        Ok(vec![])
    }
}

struct EmptyReviewRepository;

#[async_trait::async_trait]
impl ReviewRepository for EmptyReviewRepository {
    async fn recent_for_seller(
        &self,
        _seller: UserId,
        _limit: u64,
    ) -> Result<Vec<Review>, ReviewRepoError> {
        Ok(vec![])
    }
}

fn test_router() -> Router {
    let app = Arc::new(build_application(
        Arc::new(EmptyUserRepository),
        Arc::new(EmptyGameRepository),
        Arc::new(EmptyCategoryRepository),
        Arc::new(EmptyListingRepository),
        Arc::new(EmptyReviewRepository),
    ));
    build_router(app)
}

fn bearer(role: UserRole) -> String {
    let token = jwt::generate_jwt(UserId(uuid::Uuid::new_v4()), role).unwrap();
    format!("Bearer {token}")
}

fn admin_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer(UserRole::Admin))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn admin_page_redirects_anonymous_visitors() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/admin")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert_eq!(location, "/login?message=Admin%20access%20required");
}

#[tokio::test]
async fn admin_page_redirects_non_admin_sessions() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/admin")
                .header(header::AUTHORIZATION, bearer(UserRole::User))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/login"));
}

#[tokio::test]
async fn admin_session_gets_the_admin_page() {
    let response = test_router()
        .oneshot(admin_request("GET", "/admin"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&bytes).unwrap().contains("GameBay Admin"));
}

#[tokio::test]
async fn unknown_admin_resource_is_not_found() {
    let response = test_router()
        .oneshot(admin_request("GET", "/admin/api/widgets"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Resource not found");
}

#[tokio::test]
async fn unsupported_admin_method_is_rejected() {
    let response = test_router()
        .oneshot(admin_request("POST", "/admin/api/users"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(response).await["error"], "Method not allowed");
}

#[tokio::test]
async fn admin_list_carries_the_pagination_envelope() {
    let response = test_router()
        .oneshot(admin_request("GET", "/admin/api/users?page=1&limit=10"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"], serde_json::json!([]));
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn profile_requires_a_session() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/profile")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Authentication required");
}
