use axum::{Json, extract::State};
use serde::Deserialize;

use crate::{
    AppState,
    app::ApiError,
    jwt::{self, AuthBody},
};

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AuthBody>, ApiError> {
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let user = state.app.login_use_case.login(&email, &password).await?;
    let token = jwt::generate_jwt(user.user_id, user.role)
        .ok_or_else(|| ApiError::internal("Failed to issue token"))?;
    Ok(Json(AuthBody { token }))
}
