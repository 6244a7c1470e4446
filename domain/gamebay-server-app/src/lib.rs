use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::{
        category::CategoryRepository, game::GameRepository, listing::ListingRepository,
        review::ReviewRepository, user::UserRepository,
    },
    workflow::{
        account::login::{LoginUseCase, LoginUseCaseImpl},
        admin::{
            categories::{AdminCategoriesUseCase, AdminCategoriesUseCaseImpl},
            games::{AdminGamesUseCase, AdminGamesUseCaseImpl},
            listings::{AdminListingsUseCase, AdminListingsUseCaseImpl},
            users::{AdminUsersUseCase, AdminUsersUseCaseImpl},
        },
        catalog::list_games::{ListGamesUseCase, ListGamesUseCaseImpl},
        listing::{
            browse::{BrowseListingsUseCase, BrowseListingsUseCaseImpl},
            create::{CreateListingUseCase, CreateListingUseCaseImpl},
            delete::{DeleteListingUseCase, DeleteListingUseCaseImpl},
            get::{GetListingUseCase, GetListingUseCaseImpl},
            update::{UpdateListingUseCase, UpdateListingUseCaseImpl},
        },
        profile::{
            get::{GetProfileUseCase, GetProfileUseCaseImpl},
            public::{PublicProfileUseCase, PublicProfileUseCaseImpl},
            update::{UpdateProfileUseCase, UpdateProfileUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod util;
pub mod workflow;

#[cfg(test)]
pub(crate) mod mocks;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn bad_request<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::BadRequest(msg.into()))
    }

    pub fn unauthorized<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Unauthorized(msg.into()))
    }

    pub fn not_found<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::NotFound(msg.into()))
    }

    pub fn forbidden<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Forbidden(msg.into()))
    }

    pub fn internal<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Internal(msg.into()))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// The assembled marketplace application: one trait object per operation.
pub struct Application {
    pub login_use_case: Box<dyn LoginUseCase + Send + Sync + 'static>,

    pub list_games_use_case: Box<dyn ListGamesUseCase + Send + Sync + 'static>,

    pub browse_listings_use_case: Box<dyn BrowseListingsUseCase + Send + Sync + 'static>,
    pub get_listing_use_case: Box<dyn GetListingUseCase + Send + Sync + 'static>,
    pub create_listing_use_case: Box<dyn CreateListingUseCase + Send + Sync + 'static>,
    pub update_listing_use_case: Box<dyn UpdateListingUseCase + Send + Sync + 'static>,
    pub delete_listing_use_case: Box<dyn DeleteListingUseCase + Send + Sync + 'static>,

    pub get_profile_use_case: Box<dyn GetProfileUseCase + Send + Sync + 'static>,
    pub update_profile_use_case: Box<dyn UpdateProfileUseCase + Send + Sync + 'static>,
    pub public_profile_use_case: Box<dyn PublicProfileUseCase + Send + Sync + 'static>,

    pub admin_users_use_case: Box<dyn AdminUsersUseCase + Send + Sync + 'static>,
    pub admin_games_use_case: Box<dyn AdminGamesUseCase + Send + Sync + 'static>,
    pub admin_categories_use_case: Box<dyn AdminCategoriesUseCase + Send + Sync + 'static>,
    pub admin_listings_use_case: Box<dyn AdminListingsUseCase + Send + Sync + 'static>,
}

pub fn build_application<U, G, C, L, R>(
    user_repo: Arc<U>,
    game_repo: Arc<G>,
    category_repo: Arc<C>,
    listing_repo: Arc<L>,
    review_repo: Arc<R>,
) -> Application
where
    U: UserRepository + Send + Sync + 'static,
    G: GameRepository + Send + Sync + 'static,
    C: CategoryRepository + Send + Sync + 'static,
    L: ListingRepository + Send + Sync + 'static,
    R: ReviewRepository + Send + Sync + 'static,
{
    Application {
        login_use_case: Box::new(LoginUseCaseImpl::new(user_repo.clone())),

        list_games_use_case: Box::new(ListGamesUseCaseImpl::new(game_repo.clone())),

        browse_listings_use_case: Box::new(BrowseListingsUseCaseImpl::new(listing_repo.clone())),
        get_listing_use_case: Box::new(GetListingUseCaseImpl::new(listing_repo.clone())),
        create_listing_use_case: Box::new(CreateListingUseCaseImpl::new(
            listing_repo.clone(),
            game_repo.clone(),
        )),
        update_listing_use_case: Box::new(UpdateListingUseCaseImpl::new(listing_repo.clone())),
        delete_listing_use_case: Box::new(DeleteListingUseCaseImpl::new(listing_repo.clone())),

        get_profile_use_case: Box::new(GetProfileUseCaseImpl::new(user_repo.clone())),
        update_profile_use_case: Box::new(UpdateProfileUseCaseImpl::new(user_repo.clone())),
        public_profile_use_case: Box::new(PublicProfileUseCaseImpl::new(
            user_repo.clone(),
            listing_repo.clone(),
            review_repo.clone(),
        )),

        admin_users_use_case: Box::new(AdminUsersUseCaseImpl::new(user_repo.clone())),
        admin_games_use_case: Box::new(AdminGamesUseCaseImpl::new(game_repo.clone())),
        admin_categories_use_case: Box::new(AdminCategoriesUseCaseImpl::new(category_repo)),
        admin_listings_use_case: Box::new(AdminListingsUseCaseImpl::new(listing_repo)),
    }
}
