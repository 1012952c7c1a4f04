use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::models::{AnalyticsSummary, ApiResponse};
use crate::services::AnalyticsService;

#[utoipa::path(
    get,
    path = "/analytics/summary",
    tag = "analytics",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Dashboard aggregates"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn get_summary(
    analytics_service: web::Data<AnalyticsService>,
) -> Result<HttpResponse> {
    match analytics_service.summary().await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::<AnalyticsSummary>::success(response))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn analytics_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/analytics").route("/summary", web::get().to(get_summary)));
}
