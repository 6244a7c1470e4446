pub mod categories;
pub mod games;
pub mod listings;
pub mod users;
