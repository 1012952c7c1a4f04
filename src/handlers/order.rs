use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::OrderService;

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("limit" = Option<u32>, Query, description = "Page size"),
        ("status" = Option<String>, Query, description = "Order status filter"),
        ("search" = Option<String>, Query, description = "Order id or customer name")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Paginated order list"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn get_orders(
    order_service: web::Data<OrderService>,
    query: web::Query<OrderQuery>,
) -> Result<HttpResponse> {
    match order_service.list_orders(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    tag = "order",
    params(
        ("order_id" = String, Path, description = "Client-generated order id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Order detail"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    order_service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match order_service.get_order(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/orders/{order_id}/status",
    tag = "order",
    params(
        ("order_id" = String, Path, description = "Client-generated order id")
    ),
    request_body = UpdateOrderStatusRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Status updated"),
        (status = 400, description = "Invalid status transition"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn update_order_status(
    order_service: web::Data<OrderService>,
    path: web::Path<String>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse> {
    match order_service
        .update_status(&path.into_inner(), body.status)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Order status updated",
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(get_orders))
            .route("/{order_id}", web::get().to(get_order))
            .route("/{order_id}/status", web::put().to(update_order_status)),
    );
}
