use std::sync::Arc;

use gamebay_persistence_sea_orm::{
    categories::CategoryRepositoryImpl, games::GameRepositoryImpl, listings::ListingRepositoryImpl,
    reviews::ReviewRepositoryImpl, users::UserRepositoryImpl,
};
use gamebay_server_app::build_application;
use log::info;

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let user_repo = Arc::new(UserRepositoryImpl::new().await);
    let game_repo = Arc::new(GameRepositoryImpl::new().await);
    let category_repo = Arc::new(CategoryRepositoryImpl::new().await);
    let listing_repo = Arc::new(ListingRepositoryImpl::new().await);
    let review_repo = Arc::new(ReviewRepositoryImpl::new().await);

    let app = Arc::new(build_application(
        user_repo,
        game_repo,
        category_repo,
        listing_repo,
        review_repo,
    ));

    info!("Starting application");

    gamebay_server_api::run(app, shutdown_signal()).await;
}
