use axum::{
    Json,
    extract::{Path, Query, State},
};
use gamebay_server_app::domain::{
    GameId, ListingId, UserId,
    listing::{ListingKind, ListingUpdate},
};
use gamebay_server_app::workflow::listing::{browse::BrowseFilter, create::CreateListingRequest};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{AppState, app::ApiError, auth::Auth, http::ListingDto};

pub(crate) fn parse_uuid(value: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(value).map_err(|_| ApiError::bad_request("Invalid id"))
}

fn parse_kind(value: &str) -> Result<ListingKind, ApiError> {
    ListingKind::parse(value).ok_or_else(|| ApiError::bad_request("Invalid listing type"))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseQuery {
    pub game_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub seller_id: Option<String>,
}

pub async fn browse(
    State(state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> Result<Json<Vec<ListingDto>>, ApiError> {
    let filter = BrowseFilter {
        game_id: query
            .game_id
            .as_deref()
            .map(|id| parse_uuid(id).map(GameId))
            .transpose()?,
        kind: query.kind.as_deref().map(parse_kind).transpose()?,
        seller_id: query
            .seller_id
            .as_deref()
            .map(|id| parse_uuid(id).map(UserId))
            .transpose()?,
    };
    let listings = state.app.browse_listings_use_case.browse(filter).await?;
    Ok(Json(listings.into_iter().map(ListingDto::from).collect()))
}

/// The request body shared by listing create and update. Required fields are
/// checked by hand so their absence is a 400, not a deserialization error.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub game_id: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
}

struct ListingFields {
    title: String,
    description: String,
    price: f64,
    kind: ListingKind,
    game_id: GameId,
}

fn required_fields(body: &ListingBody) -> Result<ListingFields, ApiError> {
    let (Some(title), Some(description), Some(price), Some(kind), Some(game_id)) = (
        body.title.clone(),
        body.description.clone(),
        body.price,
        body.kind.as_deref(),
        body.game_id.as_deref(),
    ) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };
    Ok(ListingFields {
        title,
        description,
        price,
        kind: parse_kind(kind)?,
        game_id: GameId(parse_uuid(game_id)?),
    })
}

pub async fn create(
    Auth(session): Auth,
    State(state): State<AppState>,
    Json(body): Json<ListingBody>,
) -> Result<Json<ListingDto>, ApiError> {
    let fields = required_fields(&body)?;
    let detail = state
        .app
        .create_listing_use_case
        .create(
            session.user_id,
            CreateListingRequest {
                title: fields.title,
                description: fields.description,
                price: fields.price,
                kind: fields.kind,
                game_id: fields.game_id,
                images: body.images,
                account_level: body.account_level,
                account_details: body.account_details,
                key_details: body.key_details,
                coin_amount: body.coin_amount,
                boosting_from: body.boosting_from,
                boosting_to: body.boosting_to,
                coaching_hours: body.coaching_hours,
            },
        )
        .await?;
    Ok(Json(detail.into()))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListingDto>, ApiError> {
    let id = ListingId(parse_uuid(&id)?);
    let detail = state.app.get_listing_use_case.get(id).await?;
    Ok(Json(detail.into()))
}

pub async fn update(
    Auth(session): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ListingBody>,
) -> Result<Json<ListingDto>, ApiError> {
    let id = ListingId(parse_uuid(&id)?);
    let fields = required_fields(&body)?;
    let detail = state
        .app
        .update_listing_use_case
        .update(
            session.user_id,
            id,
            ListingUpdate {
                title: fields.title,
                description: fields.description,
                price: fields.price,
                kind: fields.kind,
                game_id: fields.game_id,
                images: body.images,
                account_level: body.account_level,
                account_details: body.account_details,
                key_details: body.key_details,
                coin_amount: body.coin_amount,
                boosting_from: body.boosting_from,
                boosting_to: body.boosting_to,
                coaching_hours: body.coaching_hours,
            },
        )
        .await?;
    Ok(Json(detail.into()))
}

pub async fn delete(
    Auth(session): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = ListingId(parse_uuid(&id)?);
    state
        .app
        .delete_listing_use_case
        .delete(session.user_id, id)
        .await?;
    Ok(Json(json!({ "success": true })))
}
