pub mod get;
pub mod public;
pub mod update;
