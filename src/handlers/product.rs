use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::ProductService;
use crate::utils::PaginationParams;

#[utoipa::path(
    get,
    path = "/products",
    tag = "product",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("limit" = Option<u32>, Query, description = "Page size"),
        ("category" = Option<String>, Query, description = "Category filter"),
        ("search" = Option<String>, Query, description = "Product name search")
    ),
    responses(
        (status = 200, description = "Paginated product list")
    )
)]
pub async fn get_products(
    product_service: web::Data<ProductService>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse> {
    match product_service.list_products(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "product",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product detail"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match product_service.get_product(&path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "product",
    request_body = CreateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Product created"),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn create_product(
    product_service: web::Data<ProductService>,
    body: web::Json<CreateProductRequest>,
) -> Result<HttpResponse> {
    match product_service.create_product(body.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "message": "Product created",
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "product",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    request_body = UpdateProductRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Product updated"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
    body: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse> {
    match product_service
        .update_product(&path.into_inner(), body.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Product updated",
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "product",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Product deleted"),
        (status = 400, description = "Product has existing orders"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    product_service: web::Data<ProductService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match product_service.delete_product(&path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Product deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/kustom-products",
    tag = "product",
    params(
        ("page" = Option<u32>, Query, description = "Page number"),
        ("limit" = Option<u32>, Query, description = "Page size")
    ),
    responses(
        (status = 200, description = "Paginated kustom template list")
    )
)]
pub async fn get_kustom_products(
    product_service: web::Data<ProductService>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    match product_service.list_kustom_products(&query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn product_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(get_products))
            .route("", web::post().to(create_product))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
    cfg.service(web::scope("/kustom-products").route("", web::get().to(get_kustom_products)));
}
