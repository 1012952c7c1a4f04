use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
};

use crate::entities::{
    customer_entity as customers, order_entity as orders, product_entity as products,
    OrderStatus,
};
use crate::error::AppResult;
use crate::models::AnalyticsSummary;

const LOW_STOCK_THRESHOLD: i32 = 5;

#[derive(Clone)]
pub struct AnalyticsService {
    db: DatabaseConnection,
}

impl AnalyticsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn summary(&self) -> AppResult<AnalyticsSummary> {
        let total_orders = orders::Entity::find().count(&self.db).await?;
        let pending_orders = self.count_by_status(OrderStatus::Pending).await?;
        let processing_orders = self.count_by_status(OrderStatus::Processing).await?;
        let completed_orders = self.count_by_status(OrderStatus::Completed).await?;
        let cancelled_orders = self.count_by_status(OrderStatus::Cancelled).await?;

        #[derive(Debug, sea_orm::FromQueryResult)]
        struct RevenueRow {
            total: Option<i64>,
        }
        // CAST keeps the sum decodable as i64 on both Postgres and SQLite.
        let total_revenue = orders::Entity::find()
            .filter(orders::Column::Status.eq(OrderStatus::Completed))
            .select_only()
            .column_as(
                sea_orm::sea_query::Expr::cust("CAST(SUM(total_amount) AS BIGINT)"),
                "total",
            )
            .into_model::<RevenueRow>()
            .one(&self.db)
            .await?
            .and_then(|r| r.total)
            .unwrap_or(0);

        let total_customers = customers::Entity::find().count(&self.db).await?;
        let total_products = products::Entity::find().count(&self.db).await?;
        let low_stock_products = products::Entity::find()
            .filter(products::Column::Stock.lt(LOW_STOCK_THRESHOLD))
            .count(&self.db)
            .await?;

        Ok(AnalyticsSummary {
            total_orders,
            pending_orders,
            processing_orders,
            completed_orders,
            cancelled_orders,
            total_revenue,
            total_customers,
            total_products,
            low_stock_products,
        })
    }

    async fn count_by_status(&self, status: OrderStatus) -> AppResult<u64> {
        Ok(orders::Entity::find()
            .filter(orders::Column::Status.eq(status))
            .count(&self.db)
            .await?)
    }
}
