use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::OrderStatus;
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::checkout::checkout,
        handlers::checkout::store_temp_checkout,
        handlers::checkout::get_temp_checkout,
        handlers::checkout::delete_temp_checkout,
        handlers::order::get_orders,
        handlers::order::get_order,
        handlers::order::update_order_status,
        handlers::customer::get_customers,
        handlers::customer::get_customer,
        handlers::product::get_products,
        handlers::product::get_product,
        handlers::product::create_product,
        handlers::product::update_product,
        handlers::product::delete_product,
        handlers::product::get_kustom_products,
        handlers::analytics::get_summary,
    ),
    components(
        schemas(
            CheckoutRequest,
            KustomCheckout,
            RegularCheckout,
            CustomerPayload,
            ProductKustomPayload,
            DesignPayload,
            DesignObjectPayload,
            CheckoutMetadata,
            ProductPayload,
            OrderDetailsPayload,
            CheckoutResponse,
            CustomerSummary,
            TempCheckoutResponse,
            OrderStatus,
            OrderResponse,
            OrderDetailResponse,
            DesignResponse,
            DesignObjectResponse,
            UpdateOrderStatusRequest,
            CustomerResponse,
            CustomerDetailResponse,
            ProductResponse,
            KustomProductResponse,
            CreateProductRequest,
            UpdateProductRequest,
            AnalyticsSummary,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "checkout", description = "Checkout transaction"),
        (name = "order", description = "Order management"),
        (name = "customer", description = "Customer directory"),
        (name = "product", description = "Product catalog"),
        (name = "analytics", description = "Dashboard aggregates")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
