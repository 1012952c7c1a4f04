use actix_web::{HttpMessage, HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::error::AppError;
use crate::middlewares::AuthenticatedUser;
use crate::models::*;
use crate::services::{CheckoutService, TempCheckoutService};

fn authenticated_user(req: &HttpRequest) -> Result<AuthenticatedUser, AppError> {
    req.extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::AuthError("Missing authenticated user".to_string()))
}

#[utoipa::path(
    post,
    path = "/checkout",
    tag = "checkout",
    request_body = CheckoutRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Order created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthenticated"),
        (status = 404, description = "Referenced product not found"),
        (status = 409, description = "Insufficient stock")
    )
)]
pub async fn checkout(
    checkout_service: web::Data<CheckoutService>,
    req: HttpRequest,
    body: web::Json<CheckoutRequest>,
) -> Result<HttpResponse> {
    let user = match authenticated_user(&req) {
        Ok(user) => user,
        Err(e) => return Ok(e.error_response()),
    };

    match checkout_service
        .process_checkout(&user.external_id, body.into_inner())
        .await
    {
        Ok(data) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "message": "Order created",
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/checkout/temp",
    tag = "checkout",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Checkout data stored"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn store_temp_checkout(
    temp_service: web::Data<TempCheckoutService>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse> {
    match temp_service.store(&body.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/checkout/temp/{key}",
    tag = "checkout",
    params(
        ("key" = String, Path, description = "Temp checkout key")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Checkout data"),
        (status = 404, description = "Key expired or unknown")
    )
)]
pub async fn get_temp_checkout(
    temp_service: web::Data<TempCheckoutService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match temp_service.fetch(&path.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/checkout/temp/{key}",
    tag = "checkout",
    params(
        ("key" = String, Path, description = "Temp checkout key")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Checkout data removed")
    )
)]
pub async fn delete_temp_checkout(
    temp_service: web::Data<TempCheckoutService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match temp_service.remove(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Checkout data removed"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn checkout_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/checkout")
            .route("", web::post().to(checkout))
            .route("/temp", web::post().to(store_temp_checkout))
            .route("/temp/{key}", web::get().to(get_temp_checkout))
            .route("/temp/{key}", web::delete().to(delete_temp_checkout)),
    );
}
