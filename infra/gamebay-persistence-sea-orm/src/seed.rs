//! Canonical catalog data and the upsert helpers the `seed` bin runs.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};

use crate::entity::{category, game, game_category};

pub struct CategorySeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
}

pub struct GameSeed {
    pub name: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub category_slug: &'static str,
}

pub const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "FPS",
        slug: "fps",
        description: "First Person Shooter games",
    },
    CategorySeed {
        name: "MOBA",
        slug: "moba",
        description: "Multiplayer Online Battle Arena games",
    },
    CategorySeed {
        name: "Battle Royale",
        slug: "battle-royale",
        description: "Battle Royale games",
    },
    CategorySeed {
        name: "Sports",
        slug: "sports",
        description: "Sports games",
    },
    CategorySeed {
        name: "RPG",
        slug: "rpg",
        description: "Role Playing Games",
    },
    CategorySeed {
        name: "Sandbox",
        slug: "sandbox",
        description: "Sandbox and Creative games",
    },
];

pub const GAMES: &[GameSeed] = &[
    GameSeed {
        name: "PUBG Mobile",
        slug: "pubg-mobile",
        description: "PlayerUnknown's Battlegrounds Mobile",
        category_slug: "battle-royale",
    },
    GameSeed {
        name: "Free Fire",
        slug: "free-fire",
        description: "Garena Free Fire",
        category_slug: "battle-royale",
    },
    GameSeed {
        name: "Call of Duty Mobile",
        slug: "call-of-duty-mobile",
        description: "Call of Duty Mobile",
        category_slug: "fps",
    },
    GameSeed {
        name: "Valorant",
        slug: "valorant",
        description: "Valorant by Riot Games",
        category_slug: "fps",
    },
    GameSeed {
        name: "FIFA 24",
        slug: "fifa-24",
        description: "EA Sports FC 24",
        category_slug: "sports",
    },
    GameSeed {
        name: "GTA V",
        slug: "gta-v",
        description: "Grand Theft Auto V",
        category_slug: "sandbox",
    },
    GameSeed {
        name: "Minecraft",
        slug: "minecraft",
        description: "Minecraft",
        category_slug: "sandbox",
    },
    GameSeed {
        name: "Fortnite",
        slug: "fortnite",
        description: "Fortnite Battle Royale",
        category_slug: "battle-royale",
    },
    GameSeed {
        name: "Apex Legends",
        slug: "apex-legends",
        description: "Apex Legends",
        category_slug: "battle-royale",
    },
    GameSeed {
        name: "League of Legends",
        slug: "league-of-legends",
        description: "League of Legends",
        category_slug: "moba",
    },
];

/// Inserts the category unless a row with its slug already exists.
/// Returns the category id and whether a new row was written.
pub async fn upsert_category<C: ConnectionTrait>(
    db: &C,
    seed: &CategorySeed,
) -> Result<(uuid::Uuid, bool), DbErr> {
    let existing = category::Entity::find()
        .filter(category::Column::Slug.eq(seed.slug))
        .one(db)
        .await?;
    if let Some(model) = existing {
        return Ok((model.id, false));
    }

    let active = category::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(seed.name.to_string()),
        slug: Set(seed.slug.to_string()),
        description: Set(Some(seed.description.to_string())),
        icon: Set(None),
    };
    let model = active.insert(db).await?;
    Ok((model.id, true))
}

/// Inserts the game unless a row with its slug already exists.
/// Returns the game id and whether a new row was written.
pub async fn upsert_game<C: ConnectionTrait>(
    db: &C,
    seed: &GameSeed,
) -> Result<(uuid::Uuid, bool), DbErr> {
    let existing = game::Entity::find()
        .filter(game::Column::Slug.eq(seed.slug))
        .one(db)
        .await?;
    if let Some(model) = existing {
        return Ok((model.id, false));
    }

    let now = chrono::Utc::now();
    let active = game::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(seed.name.to_string()),
        slug: Set(seed.slug.to_string()),
        description: Set(Some(seed.description.to_string())),
        image: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let model = active.insert(db).await?;
    Ok((model.id, true))
}

/// Inserts the game/category link unless it already exists.
/// Returns whether a new link was written.
pub async fn ensure_link<C: ConnectionTrait>(
    db: &C,
    game_id: uuid::Uuid,
    category_id: uuid::Uuid,
) -> Result<bool, DbErr> {
    let linked = game_category::Entity::find()
        .filter(game_category::Column::GameId.eq(game_id))
        .filter(game_category::Column::CategoryId.eq(category_id))
        .one(db)
        .await?;
    if linked.is_some() {
        return Ok(false);
    }

    let active = game_category::ActiveModel {
        game_id: Set(game_id),
        category_id: Set(category_id),
    };
    active.insert(db).await?;
    Ok(true)
}
