use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::entities::{design_entity, design_object_entity, order_entity, OrderStatus};
use crate::models::CustomerSummary;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub order_id: String,
    pub status: OrderStatus,
    pub product_name: Option<String>,
    pub quantity: Option<i32>,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: i64,
    pub order_id: String,
    pub status: OrderStatus,
    pub product_name: Option<String>,
    pub quantity: Option<i32>,
    pub total_amount: i64,
    pub customer: CustomerSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design: Option<DesignResponse>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignResponse {
    pub id: i64,
    pub canvas: Option<Value>,
    pub preview_image: Option<String>,
    pub background_color: String,
    pub decal_color: String,
    pub canvas_width: i32,
    pub canvas_height: i32,
    pub uv_guide: bool,
    pub total_objects: i32,
    pub objects: Vec<DesignObjectResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignObjectResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub object_type: String,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub angle: Option<f64>,
    pub scale_x: Option<f64>,
    pub scale_y: Option<f64>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub text: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<f64>,
    pub src: Option<String>,
    pub extra: Option<Value>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<OrderStatus>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

impl OrderResponse {
    pub fn from_model(m: order_entity::Model, product_name: Option<String>) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            status: m.status,
            product_name,
            quantity: m.quantity,
            total_amount: m.total_amount,
            created_at: m.created_at,
        }
    }
}

impl DesignResponse {
    pub fn from_model(
        design: design_entity::Model,
        objects: Vec<design_object_entity::Model>,
    ) -> Self {
        Self {
            id: design.id,
            canvas: design.canvas,
            preview_image: design.preview_image,
            background_color: design.background_color,
            decal_color: design.decal_color,
            canvas_width: design.canvas_width,
            canvas_height: design.canvas_height,
            uv_guide: design.uv_guide,
            total_objects: design.total_objects,
            objects: objects.into_iter().map(DesignObjectResponse::from).collect(),
        }
    }
}

impl From<design_object_entity::Model> for DesignObjectResponse {
    fn from(m: design_object_entity::Model) -> Self {
        Self {
            id: m.id,
            object_type: m.object_type,
            left: m.left,
            top: m.top,
            width: m.width,
            height: m.height,
            angle: m.angle,
            scale_x: m.scale_x,
            scale_y: m.scale_y,
            fill: m.fill,
            stroke: m.stroke,
            text: m.text,
            font_family: m.font_family,
            font_size: m.font_size,
            src: m.src,
            extra: m.extra,
        }
    }
}
