use gamebay_persistence_sea_orm::{create_db_pool, entity::user};
use gamebay_server_app::domain::user::UserRole;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

const ADMIN_EMAIL: &str = "admin@gamebay.dev";
const ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let pool = create_db_pool().await;

    let existing = user::Entity::find()
        .filter(user::Column::Role.eq(UserRole::Admin.as_str()))
        .one(&pool)
        .await
        .expect("Failed to look up admin user");

    if let Some(admin) = existing {
        println!("Admin user already exists: {}", admin.email);
        return;
    }

    let password_hash = bcrypt::hash(ADMIN_PASSWORD, 12).expect("Failed to hash password");

    let now = chrono::Utc::now();
    let active = user::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        username: Set("admin".to_string()),
        email: Set(ADMIN_EMAIL.to_string()),
        name: Set(Some("Admin User".to_string())),
        password_hash: Set(password_hash),
        role: Set(UserRole::Admin.as_str().to_string()),
        phone_number: Set(None),
        city: Set(None),
        image: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };
    let admin = active.insert(&pool).await.expect("Failed to create admin user");

    println!("Admin user created successfully");
    println!("Email: {}", ADMIN_EMAIL);
    println!("Password: {}", ADMIN_PASSWORD);
    println!("Username: {}", admin.username);
    println!("ID: {}", admin.id);
}
