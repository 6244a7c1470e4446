use axum::{
    Router,
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, Redirect},
    routing::{any, get},
};
use gamebay_server_app::domain::user::UserRole;

use crate::{AppState, auth::session_from_parts, jwt::Session};

mod api;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(admin_page))
        .route("/admin/api/{resource}", any(api::collection))
        .route("/admin/api/{resource}/{id}", any(api::item))
}

/// Admin gate: anything without an admin session is sent to the login page.
pub struct AdminAuth(pub Session);

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_from_parts(parts) {
            Some(session) if session.role == UserRole::Admin => Ok(AdminAuth(session)),
            _ => Err(Redirect::to("/login?message=Admin%20access%20required")),
        }
    }
}

async fn admin_page(AdminAuth(_): AdminAuth) -> Html<&'static str> {
    Html(include_str!("../../assets/admin.html"))
}
