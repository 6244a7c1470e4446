use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::Method,
};
use gamebay_server_app::domain::{
    CategoryId, GameId, ListingId, Page, PageRequest, UserId,
    category::{CategoryUpdate, NewCategory},
    game::{GameUpdate, NewGame},
    listing::ListingStatus,
    user::{UserRole, UserUpdate},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    AppState,
    app::ApiError,
    http::{CategoryDto, GameSummaryDto, ListingDto, UserDto, games::GameDto, listings::parse_uuid},
};

use super::AdminAuth;

#[derive(Deserialize)]
pub struct PageParams {
    page: Option<u64>,
    limit: Option<u64>,
}

impl PageParams {
    fn request(&self) -> PageRequest {
        PageRequest::new(self.page.unwrap_or(1), self.limit.unwrap_or(10))
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|_| ApiError::bad_request("Invalid request body"))
}

fn page_response<T, D: Serialize>(page: Page<T>, convert: impl Fn(T) -> D) -> Value {
    let total_pages = page.total_pages();
    let items: Vec<D> = page.items.into_iter().map(convert).collect();
    json!({
        "data": items,
        "pagination": {
            "page": page.page,
            "limit": page.limit,
            "total": page.total,
            "totalPages": total_pages,
        }
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryWithCountDto {
    #[serde(flatten)]
    category: CategoryDto,
    game_count: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminListingRowDto {
    #[serde(flatten)]
    listing: ListingDto,
    game_name: String,
    seller_username: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserBody {
    username: Option<String>,
    email: Option<String>,
    name: Option<String>,
    role: Option<String>,
    phone_number: Option<String>,
    city: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameBody {
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    image: Option<String>,
    category_ids: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CategoryBody {
    name: Option<String>,
    slug: Option<String>,
    description: Option<String>,
    icon: Option<String>,
}

#[derive(Deserialize)]
struct ListingBody {
    status: Option<String>,
}

fn parse_role(value: &str) -> Result<UserRole, ApiError> {
    UserRole::parse(value).ok_or_else(|| ApiError::bad_request("Invalid role"))
}

fn parse_status(value: &str) -> Result<ListingStatus, ApiError> {
    ListingStatus::parse(value).ok_or_else(|| ApiError::bad_request("Invalid status"))
}

fn parse_category_ids(ids: Option<Vec<String>>) -> Result<Option<Vec<CategoryId>>, ApiError> {
    ids.map(|ids| {
        ids.iter()
            .map(|id| parse_uuid(id).map(CategoryId))
            .collect::<Result<Vec<_>, _>>()
    })
    .transpose()
}

pub async fn collection(
    AdminAuth(_): AdminAuth,
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<PageParams>,
    method: Method,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    match resource.as_str() {
        "users" => match method {
            Method::GET => {
                let page = state.app.admin_users_use_case.list(params.request()).await?;
                Ok(Json(page_response(page, UserDto::from)))
            }
            _ => Err(ApiError::MethodNotAllowed),
        },
        "games" => match method {
            Method::GET => {
                let page = state.app.admin_games_use_case.list(params.request()).await?;
                Ok(Json(page_response(page, GameDto::from)))
            }
            Method::POST => {
                let body: GameBody = parse_body(&body)?;
                let (Some(name), Some(slug)) = (body.name, body.slug) else {
                    return Err(ApiError::bad_request("Missing required fields"));
                };
                let category_ids = parse_category_ids(body.category_ids)?.unwrap_or_default();
                let game = state
                    .app
                    .admin_games_use_case
                    .create(
                        NewGame {
                            name,
                            slug,
                            description: body.description,
                            image: body.image,
                        },
                        category_ids,
                    )
                    .await?;
                Ok(Json(json!({ "data": GameSummaryDto::from(game) })))
            }
            _ => Err(ApiError::MethodNotAllowed),
        },
        "categories" => match method {
            Method::GET => {
                let categories = state.app.admin_categories_use_case.list().await?;
                let data: Vec<CategoryWithCountDto> = categories
                    .into_iter()
                    .map(|c| CategoryWithCountDto {
                        category: c.category.into(),
                        game_count: c.game_count,
                    })
                    .collect();
                Ok(Json(json!({ "data": data })))
            }
            Method::POST => {
                let body: CategoryBody = parse_body(&body)?;
                let (Some(name), Some(slug)) = (body.name, body.slug) else {
                    return Err(ApiError::bad_request("Missing required fields"));
                };
                let category = state
                    .app
                    .admin_categories_use_case
                    .create(NewCategory {
                        name,
                        slug,
                        description: body.description,
                        icon: body.icon,
                    })
                    .await?;
                Ok(Json(json!({ "data": CategoryDto::from(category) })))
            }
            _ => Err(ApiError::MethodNotAllowed),
        },
        "listings" => match method {
            Method::GET => {
                let page = state
                    .app
                    .admin_listings_use_case
                    .list(params.request())
                    .await?;
                Ok(Json(page_response(page, |row| AdminListingRowDto {
                    listing: row.listing.into(),
                    game_name: row.game_name,
                    seller_username: row.seller_username,
                })))
            }
            _ => Err(ApiError::MethodNotAllowed),
        },
        _ => Err(ApiError::not_found("Resource not found")),
    }
}

pub async fn item(
    AdminAuth(_): AdminAuth,
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    method: Method,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    match resource.as_str() {
        "users" => {
            let id = UserId(parse_uuid(&id)?);
            match method {
                Method::GET => {
                    let user = state.app.admin_users_use_case.get(id).await?;
                    Ok(Json(json!({ "data": user.map(UserDto::from) })))
                }
                Method::PUT => {
                    let body: UserBody = parse_body(&body)?;
                    let update = UserUpdate {
                        username: body.username,
                        email: body.email,
                        name: body.name,
                        role: body.role.as_deref().map(parse_role).transpose()?,
                        phone_number: body.phone_number,
                        city: body.city,
                    };
                    let user = state.app.admin_users_use_case.update(id, update).await?;
                    Ok(Json(json!({ "data": UserDto::from(user) })))
                }
                Method::DELETE => {
                    state.app.admin_users_use_case.delete(id).await?;
                    Ok(Json(json!({ "success": true })))
                }
                _ => Err(ApiError::MethodNotAllowed),
            }
        }
        "games" => {
            let id = GameId(parse_uuid(&id)?);
            match method {
                Method::GET => {
                    let game = state.app.admin_games_use_case.get(id).await?;
                    Ok(Json(json!({ "data": game.map(GameDto::from) })))
                }
                Method::PUT => {
                    let body: GameBody = parse_body(&body)?;
                    let category_ids = parse_category_ids(body.category_ids)?;
                    let update = GameUpdate {
                        name: body.name,
                        slug: body.slug,
                        description: body.description,
                        image: body.image,
                    };
                    let game = state
                        .app
                        .admin_games_use_case
                        .update(id, update, category_ids)
                        .await?;
                    Ok(Json(json!({ "data": GameSummaryDto::from(game) })))
                }
                Method::DELETE => {
                    state.app.admin_games_use_case.delete(id).await?;
                    Ok(Json(json!({ "success": true })))
                }
                _ => Err(ApiError::MethodNotAllowed),
            }
        }
        "categories" => {
            let id = CategoryId(parse_uuid(&id)?);
            match method {
                Method::GET => {
                    let category = state.app.admin_categories_use_case.get(id).await?;
                    Ok(Json(json!({ "data": category.map(CategoryDto::from) })))
                }
                Method::PUT => {
                    let body: CategoryBody = parse_body(&body)?;
                    let update = CategoryUpdate {
                        name: body.name,
                        slug: body.slug,
                        description: body.description,
                        icon: body.icon,
                    };
                    let category = state
                        .app
                        .admin_categories_use_case
                        .update(id, update)
                        .await?;
                    Ok(Json(json!({ "data": CategoryDto::from(category) })))
                }
                Method::DELETE => {
                    state.app.admin_categories_use_case.delete(id).await?;
                    Ok(Json(json!({ "success": true })))
                }
                _ => Err(ApiError::MethodNotAllowed),
            }
        }
        "listings" => {
            let id = ListingId(parse_uuid(&id)?);
            match method {
                Method::GET => {
                    let listing = state.app.admin_listings_use_case.get(id).await?;
                    Ok(Json(json!({ "data": listing.map(ListingDto::from) })))
                }
                Method::PUT => {
                    let body: ListingBody = parse_body(&body)?;
                    let Some(status) = body.status.as_deref() else {
                        return Err(ApiError::bad_request("Missing required fields"));
                    };
                    let listing = state
                        .app
                        .admin_listings_use_case
                        .set_status(id, parse_status(status)?)
                        .await?;
                    Ok(Json(json!({ "data": ListingDto::from(listing) })))
                }
                Method::DELETE => {
                    state.app.admin_listings_use_case.delete(id).await?;
                    Ok(Json(json!({ "success": true })))
                }
                _ => Err(ApiError::MethodNotAllowed),
            }
        }
        _ => Err(ApiError::not_found("Resource not found")),
    }
}
