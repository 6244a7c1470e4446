use chrono::Utc;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: f64,
    pub kind: String,
    pub status: String,
    /// JSON-encoded list of image URLs.
    #[sea_orm(column_type = "Text")]
    pub images: String,
    pub account_level: Option<i32>,
    pub account_details: Option<String>,
    pub key_details: Option<String>,
    pub coin_amount: Option<i32>,
    pub boosting_from: Option<String>,
    pub boosting_to: Option<String>,
    pub coaching_hours: Option<i32>,
    pub game_id: Uuid,
    pub seller_id: Uuid,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
