use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::CustomerService;

#[utoipa::path(
    get,
    path = "/customers",
    tag = "customer",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("limit" = Option<u32>, Query, description = "Page size"),
        ("search" = Option<String>, Query, description = "Name or email")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Paginated customer list"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn get_customers(
    customer_service: web::Data<CustomerService>,
    query: web::Query<CustomerQuery>,
) -> Result<HttpResponse> {
    match customer_service.list_customers(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    tag = "customer",
    params(
        ("id" = i64, Path, description = "Customer id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Customer detail"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    customer_service: web::Data<CustomerService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match customer_service.get_customer(path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn customer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .route("", web::get().to(get_customers))
            .route("/{id}", web::get().to(get_customer)),
    );
}
