use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Serialized canvas state for one kustom order, one-to-one with `orders`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "designs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_id: i64,
    pub canvas: Option<Json>,
    pub preview_image: Option<String>,
    pub background_color: String,
    pub decal_color: String,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub uv_guide: bool,
    pub total_objects: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
