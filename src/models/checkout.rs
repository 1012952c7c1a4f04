use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::entities::OrderStatus;
use crate::models::FieldError;
use crate::utils::is_valid_email;

fn default_color() -> String {
    "#ffffff".to_string()
}

fn default_canvas_dim() -> i32 {
    400
}

/// Checkout request body, discriminated by `productType`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(tag = "productType", rename_all = "lowercase")]
pub enum CheckoutRequest {
    Kustom(KustomCheckout),
    Regular(RegularCheckout),
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KustomCheckout {
    pub customer: CustomerPayload,
    pub product_kustom: ProductKustomPayload,
    pub design: DesignPayload,
    pub metadata: CheckoutMetadata,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegularCheckout {
    pub customer: CustomerPayload,
    pub product: ProductPayload,
    pub order_details: OrderDetailsPayload,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductKustomPayload {
    pub model_id: String,
    pub model_name: String,
    pub model_url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub uv_map_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignPayload {
    /// Serialized canvas state, opaque to the backend.
    #[serde(default)]
    pub canvas: Option<Value>,
    #[serde(default)]
    pub preview_image: Option<String>,
    #[serde(default = "default_color")]
    pub background_color: String,
    #[serde(default = "default_color")]
    pub decal_color: String,
    #[serde(default)]
    pub objects: Vec<DesignObjectPayload>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesignObjectPayload {
    #[serde(rename = "type")]
    pub object_type: String,
    #[serde(default)]
    pub left: Option<f64>,
    #[serde(default)]
    pub top: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub angle: Option<f64>,
    #[serde(default)]
    pub scale_x: Option<f64>,
    #[serde(default)]
    pub scale_y: Option<f64>,
    #[serde(default)]
    pub fill: Option<String>,
    #[serde(default)]
    pub stroke: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub font_size: Option<f64>,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub extra: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutMetadata {
    /// Client-generated order id.
    pub order_id: String,
    #[serde(default)]
    pub total_objects: i32,
    #[serde(default)]
    pub uv_guide: bool,
    #[serde(default = "default_canvas_dim")]
    pub canvas_width: i32,
    #[serde(default = "default_canvas_dim")]
    pub canvas_height: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsPayload {
    pub quantity: i32,
    /// Client-generated order id.
    pub order_id: String,
    pub total_amount: i64,
}

impl CheckoutRequest {
    pub fn customer(&self) -> &CustomerPayload {
        match self {
            CheckoutRequest::Kustom(k) => &k.customer,
            CheckoutRequest::Regular(r) => &r.customer,
        }
    }

    pub fn order_id(&self) -> &str {
        match self {
            CheckoutRequest::Kustom(k) => &k.metadata.order_id,
            CheckoutRequest::Regular(r) => &r.order_details.order_id,
        }
    }

    /// Field-level validation, run before any persistence is attempted.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let customer = self.customer();
        if customer.name.trim().is_empty() {
            errors.push(FieldError::new("customer.name", "Name is required"));
        }
        if customer.email.trim().is_empty() {
            errors.push(FieldError::new("customer.email", "Email is required"));
        } else if !is_valid_email(&customer.email) {
            errors.push(FieldError::new("customer.email", "Email is malformed"));
        }
        if customer.phone.trim().is_empty() {
            errors.push(FieldError::new("customer.phone", "Phone is required"));
        }
        if customer.address.trim().is_empty() {
            errors.push(FieldError::new("customer.address", "Address is required"));
        }

        match self {
            CheckoutRequest::Kustom(k) => {
                if k.product_kustom.model_id.trim().is_empty() {
                    errors.push(FieldError::new(
                        "productKustom.modelId",
                        "Model id is required",
                    ));
                }
                if k.product_kustom.model_name.trim().is_empty() {
                    errors.push(FieldError::new(
                        "productKustom.modelName",
                        "Model name is required",
                    ));
                }
                if k.product_kustom.model_url.trim().is_empty() {
                    errors.push(FieldError::new(
                        "productKustom.modelUrl",
                        "Model URL is required",
                    ));
                }
                if k.metadata.order_id.trim().is_empty() {
                    errors.push(FieldError::new("metadata.orderId", "Order id is required"));
                }
                if k.metadata.total_objects < 0 {
                    errors.push(FieldError::new(
                        "metadata.totalObjects",
                        "Object count must not be negative",
                    ));
                }
                if k.metadata.canvas_width <= 0 || k.metadata.canvas_height <= 0 {
                    errors.push(FieldError::new(
                        "metadata.canvasWidth",
                        "Canvas dimensions must be positive",
                    ));
                }
            }
            CheckoutRequest::Regular(r) => {
                if r.product.id.trim().is_empty() {
                    errors.push(FieldError::new("product.id", "Product id is required"));
                }
                if r.order_details.order_id.trim().is_empty() {
                    errors.push(FieldError::new(
                        "orderDetails.orderId",
                        "Order id is required",
                    ));
                }
                if r.order_details.quantity < 1 {
                    errors.push(FieldError::new(
                        "orderDetails.quantity",
                        "Quantity must be at least 1",
                    ));
                }
                if r.order_details.total_amount < 0 {
                    errors.push(FieldError::new(
                        "orderDetails.totalAmount",
                        "Total amount must not be negative",
                    ));
                }
            }
        }

        errors
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    pub status: OrderStatus,
    pub total_amount: i64,
    pub customer: CustomerSummary,
    pub product_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TempCheckoutResponse {
    pub key: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_kustom_variant() {
        let body = json!({
            "productType": "kustom",
            "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
            "productKustom": {"modelId": "M1", "modelName": "Tee", "modelUrl": "u"},
            "design": {"objects": []},
            "metadata": {"orderId": "ORD-1", "totalObjects": 0}
        });

        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        let CheckoutRequest::Kustom(kustom) = &request else {
            panic!("expected kustom variant");
        };

        assert_eq!(kustom.metadata.order_id, "ORD-1");
        assert_eq!(kustom.metadata.canvas_width, 400);
        assert_eq!(kustom.metadata.canvas_height, 400);
        assert!(!kustom.metadata.uv_guide);
        assert_eq!(kustom.design.background_color, "#ffffff");
        assert_eq!(kustom.design.decal_color, "#ffffff");
        assert!(kustom.design.objects.is_empty());
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_deserialize_regular_variant() {
        let body = json!({
            "productType": "regular",
            "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
            "product": {"id": "P1", "price": 50000},
            "orderDetails": {"quantity": 3, "orderId": "ORD-2", "totalAmount": 150000}
        });

        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        let CheckoutRequest::Regular(regular) = &request else {
            panic!("expected regular variant");
        };

        assert_eq!(regular.product.id, "P1");
        assert_eq!(regular.order_details.quantity, 3);
        assert_eq!(regular.order_details.total_amount, 150000);
        assert!(request.validate().is_empty());
    }

    #[test]
    fn test_unknown_discriminator_is_rejected() {
        let body = json!({
            "productType": "subscription",
            "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"}
        });

        assert!(serde_json::from_value::<CheckoutRequest>(body).is_err());
    }

    #[test]
    fn test_validate_missing_contact_fields() {
        let body = json!({
            "productType": "regular",
            "customer": {"name": "", "email": "not-an-email", "phone": "", "address": "Jl. A"},
            "product": {"id": "P1"},
            "orderDetails": {"quantity": 1, "orderId": "ORD-3", "totalAmount": 50000}
        });

        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert!(fields.contains(&"customer.name"));
        assert!(fields.contains(&"customer.email"));
        assert!(fields.contains(&"customer.phone"));
        assert!(!fields.contains(&"customer.address"));
    }

    #[test]
    fn test_validate_non_positive_quantity() {
        let body = json!({
            "productType": "regular",
            "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
            "product": {"id": "P1"},
            "orderDetails": {"quantity": 0, "orderId": "ORD-4", "totalAmount": 0}
        });

        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "orderDetails.quantity");
    }

    #[test]
    fn test_design_objects_deserialize() {
        let body = json!({
            "productType": "kustom",
            "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
            "productKustom": {"modelId": "M1", "modelName": "Tee", "modelUrl": "u"},
            "design": {
                "backgroundColor": "#ff0000",
                "objects": [
                    {"type": "text", "text": "hello", "left": 10.5, "top": 20.0, "fontSize": 24.0},
                    {"type": "image", "src": "https://cdn.example.com/logo.png"}
                ]
            },
            "metadata": {"orderId": "ORD-5", "totalObjects": 2, "uvGuide": true, "canvasWidth": 512, "canvasHeight": 512}
        });

        let request: CheckoutRequest = serde_json::from_value(body).unwrap();
        let CheckoutRequest::Kustom(kustom) = request else {
            panic!("expected kustom variant");
        };

        assert_eq!(kustom.design.background_color, "#ff0000");
        assert_eq!(kustom.design.objects.len(), 2);
        assert_eq!(kustom.design.objects[0].object_type, "text");
        assert_eq!(kustom.design.objects[0].font_size, Some(24.0));
        assert_eq!(kustom.design.objects[1].object_type, "image");
        assert!(kustom.metadata.uv_guide);
        assert_eq!(kustom.metadata.canvas_width, 512);
    }
}
