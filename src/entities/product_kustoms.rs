use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Custom/3D product template. Auto-created on first checkout that
/// references an unknown model id.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "product_kustoms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub model_id: String,
    pub name: String,
    pub model_url: String,
    pub preview_url: Option<String>,
    pub uv_map_url: Option<String>,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
