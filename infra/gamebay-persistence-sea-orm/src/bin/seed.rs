use std::collections::HashMap;

use gamebay_persistence_sea_orm::{create_db_pool, seed};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let pool = create_db_pool().await;

    let mut category_ids = HashMap::new();
    for category in seed::CATEGORIES {
        let (id, _) = seed::upsert_category(&pool, category)
            .await
            .expect("Failed to seed category");
        category_ids.insert(category.slug, id);
    }

    for game in seed::GAMES {
        let (game_id, _) = seed::upsert_game(&pool, game)
            .await
            .expect("Failed to seed game");
        seed::ensure_link(&pool, game_id, category_ids[game.category_slug])
            .await
            .expect("Failed to link game to category");
    }

    println!("Seeded categories: {}", seed::CATEGORIES.len());
    println!("Seeded games: {}", seed::GAMES.len());
}
