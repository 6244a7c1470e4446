use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::{
    AppState,
    app::ApiError,
    http::{CountsDto, ReviewDto, SellerListingDto, SellerProfileDto, UserDto},
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfileDto {
    pub user: UserDto,
    pub seller_profile: Option<SellerProfileDto>,
    pub listings: Vec<SellerListingDto>,
    pub reviews: Vec<ReviewDto>,
    pub counts: CountsDto,
    pub average_rating: f64,
}

pub async fn public_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PublicProfileDto>, ApiError> {
    let view = state.app.public_profile_use_case.get(&username).await?;
    Ok(Json(PublicProfileDto {
        user: view.user.into(),
        seller_profile: view.seller_profile.map(Into::into),
        listings: view.listings.into_iter().map(Into::into).collect(),
        reviews: view.reviews.into_iter().map(Into::into).collect(),
        counts: view.counts.into(),
        average_rating: view.average_rating,
    }))
}
