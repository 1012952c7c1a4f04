use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{product_entity, product_kustom_entity};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: i64,
    pub stock: i32,
    pub category: Option<String>,
    pub size: Option<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KustomProductResponse {
    pub id: i64,
    pub model_id: String,
    pub name: String,
    pub model_url: String,
    pub preview_url: Option<String>,
    pub uv_map_url: Option<String>,
    pub price: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    pub price: i64,
    pub stock: i32,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub size: Option<String>,
    pub images: Option<Vec<String>>,
}

impl From<product_entity::Model> for ProductResponse {
    fn from(m: product_entity::Model) -> Self {
        let images = m
            .images
            .and_then(|v| serde_json::from_value::<Vec<String>>(v).ok())
            .unwrap_or_default();
        Self {
            id: m.id,
            name: m.name,
            price: m.price,
            stock: m.stock,
            category: m.category,
            size: m.size,
            images,
            created_at: m.created_at,
        }
    }
}

impl From<product_kustom_entity::Model> for KustomProductResponse {
    fn from(m: product_kustom_entity::Model) -> Self {
        Self {
            id: m.id,
            model_id: m.model_id,
            name: m.name,
            model_url: m.model_url,
            preview_url: m.preview_url,
            uv_map_url: m.uv_map_url,
            price: m.price,
        }
    }
}
