use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::headers::{Authorization, Cookie, HeaderMapExt, authorization::Bearer};

use crate::{
    AppState,
    app::ApiError,
    jwt::{self, Session},
};

pub struct Auth(pub Session);

impl FromRequestParts<AppState> for Auth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match session_from_parts(parts) {
            Some(session) => Ok(Auth(session)),
            None => Err(ApiError::unauthorized("Authentication required")),
        }
    }
}

/// Resolves a session from a Bearer header or the `session` cookie.
pub(crate) fn session_from_parts(parts: &Parts) -> Option<Session> {
    if let Some(Authorization(bearer)) = parts.headers.typed_get::<Authorization<Bearer>>()
        && let Some(session) = jwt::validate_jwt(bearer.token())
    {
        return Some(session);
    }

    if let Some(cookie) = parts.headers.typed_get::<Cookie>()
        && let Some(token) = cookie.get("session")
        && let Some(session) = jwt::validate_jwt(token)
    {
        return Some(session);
    }

    None
}
