use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    response::Html,
    routing::{get, post},
};
use gamebay_server_app::Application;
use tower_http::trace::TraceLayer;

mod admin;
mod app;
mod auth;
mod http;
mod jwt;

#[cfg(test)]
mod tests;

pub use app::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub app: Arc<Application>,
}

pub fn build_router(app: Arc<Application>) -> Router {
    let state = AppState { app };

    Router::new()
        .route("/api/games", get(http::games::list_games))
        .route(
            "/api/listings",
            get(http::listings::browse).post(http::listings::create),
        )
        .route(
            "/api/listings/{id}",
            get(http::listings::get)
                .put(http::listings::update)
                .delete(http::listings::delete),
        )
        .route(
            "/api/profile",
            get(http::profile::get).put(http::profile::update),
        )
        .route("/api/users/{username}", get(http::users::public_profile))
        .route("/auth/login", post(http::login::login))
        .route("/login", get(login_page))
        .merge(admin::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(app: Arc<Application>, shutdown: impl Future<Output = ()> + Send + 'static) {
    let router = build_router(app);

    let port = std::env::var("GAMEBAY_HTTP_PORT")
        .expect("GAMEBAY_HTTP_PORT must be set")
        .parse::<u16>()
        .expect("GAMEBAY_HTTP_PORT must be a valid u16");
    let host = std::env::var("GAMEBAY_HOST").expect("GAMEBAY_HOST must be set");
    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port))
        .await
        .expect("Failed to bind HTTP listener");

    log::info!("Listening on {}:{}", host, port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .expect("HTTP server failed");
}

async fn login_page() -> Html<&'static str> {
    Html(include_str!("../assets/login.html"))
}
