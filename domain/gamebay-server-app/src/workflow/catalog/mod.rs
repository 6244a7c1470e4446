pub mod list_games;
