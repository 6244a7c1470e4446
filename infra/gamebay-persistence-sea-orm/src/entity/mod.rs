pub mod category;
pub mod game;
pub mod game_category;
pub mod listing;
pub mod order;
pub mod review;
pub mod seller_profile;
pub mod user;
