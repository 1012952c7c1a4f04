use serde::Serialize;
use utoipa::ToSchema;

/// Dashboard aggregates. Revenue only counts completed orders.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub processing_orders: u64,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
    pub total_revenue: i64,
    pub total_customers: u64,
    pub total_products: u64,
    pub low_stock_products: u64,
}
