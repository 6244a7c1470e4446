use axum::{Json, extract::State};
use gamebay_server_app::workflow::profile::update::ProfileUpdateRequest;
use serde::{Deserialize, Serialize};

use crate::{
    AppState,
    app::ApiError,
    auth::Auth,
    http::{CountsDto, SellerProfileDto, UserDto},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub user: UserDto,
    pub seller_profile: Option<SellerProfileDto>,
    pub counts: CountsDto,
}

pub async fn get(
    Auth(session): Auth,
    State(state): State<AppState>,
) -> Result<Json<ProfileDto>, ApiError> {
    let view = state.app.get_profile_use_case.get(session.user_id).await?;
    Ok(Json(ProfileDto {
        user: view.user.into(),
        seller_profile: view.seller_profile.map(Into::into),
        counts: view.counts.into(),
    }))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub city: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

pub async fn update(
    Auth(session): Auth,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileBody>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state
        .app
        .update_profile_use_case
        .update(
            session.user_id,
            ProfileUpdateRequest {
                name: body.name,
                phone_number: body.phone_number,
                city: body.city,
                display_name: body.display_name,
                bio: body.bio,
            },
        )
        .await?;
    Ok(Json(user.into()))
}
