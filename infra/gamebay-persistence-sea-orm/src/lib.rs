use async_lock::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

pub mod categories;
pub mod entity;
pub mod games;
pub mod listings;
pub mod reviews;
pub mod seed;
pub mod users;

pub use categories::CategoryRepositoryImpl;
pub use games::GameRepositoryImpl;
pub use listings::ListingRepositoryImpl;
pub use reviews::ReviewRepositoryImpl;
pub use users::UserRepositoryImpl;

static DB_POOL: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn create_db_pool() -> DatabaseConnection {
    DB_POOL
        .get_or_init(|| async move {
            let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

            let mut opt = ConnectOptions::new(&db_url);
            opt.max_connections(5);

            Database::connect(opt)
                .await
                .expect("Failed to connect to database")
        })
        .await
        .clone()
}
