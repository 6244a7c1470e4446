use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use gamebay_server_app::domain::game::GameWithCategories;
use serde::Serialize;

use crate::{AppState, app::ApiError, http::CategoryDto};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub categories: Vec<CategoryDto>,
    pub listing_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<GameWithCategories> for GameDto {
    fn from(game: GameWithCategories) -> Self {
        Self {
            id: game.game.id.to_string(),
            name: game.game.name,
            slug: game.game.slug,
            description: game.game.description,
            image: game.game.image,
            categories: game.categories.into_iter().map(Into::into).collect(),
            listing_count: game.listing_count,
            created_at: game.game.created_at,
            updated_at: game.game.updated_at,
        }
    }
}

pub async fn list_games(State(state): State<AppState>) -> Result<Json<Vec<GameDto>>, ApiError> {
    let games = state.app.list_games_use_case.list().await?;
    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}
