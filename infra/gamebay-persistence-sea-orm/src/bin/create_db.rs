use gamebay_persistence_sea_orm::{
    create_db_pool,
    entity::{category, game, game_category, listing, order, review, seller_profile, user},
};
use sea_orm::{ConnectionTrait, Schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let pool = create_db_pool().await;

    let schema = Schema::new(pool.get_database_backend());
    let user_table = schema.create_table_from_entity(user::Entity);
    let seller_profile_table = schema.create_table_from_entity(seller_profile::Entity);
    let game_table = schema.create_table_from_entity(game::Entity);
    let category_table = schema.create_table_from_entity(category::Entity);
    let game_category_table = schema.create_table_from_entity(game_category::Entity);
    let listing_table = schema.create_table_from_entity(listing::Entity);
    let order_table = schema.create_table_from_entity(order::Entity);
    let review_table = schema.create_table_from_entity(review::Entity);

    pool.execute(&user_table)
        .await
        .expect("Failed to create users table");
    pool.execute(&seller_profile_table)
        .await
        .expect("Failed to create seller profiles table");
    pool.execute(&game_table)
        .await
        .expect("Failed to create games table");
    pool.execute(&category_table)
        .await
        .expect("Failed to create categories table");
    pool.execute(&game_category_table)
        .await
        .expect("Failed to create game categories table");
    pool.execute(&listing_table)
        .await
        .expect("Failed to create listings table");
    pool.execute(&order_table)
        .await
        .expect("Failed to create orders table");
    pool.execute(&review_table)
        .await
        .expect("Failed to create reviews table");

    println!("Created database tables successfully");
}
