use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::entities::{customer_entity as customers, order_entity as orders};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{PaginatedResponse, PaginationParams};

#[derive(Clone)]
pub struct CustomerService {
    db: DatabaseConnection,
}

impl CustomerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_customers(
        &self,
        query: &CustomerQuery,
    ) -> AppResult<PaginatedResponse<CustomerResponse>> {
        let params = PaginationParams::new(query.page, query.limit);

        let mut select = customers::Entity::find();

        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            select = select.filter(
                Condition::any()
                    .add(customers::Column::Name.contains(search))
                    .add(customers::Column::Email.contains(search)),
            );
        }

        let total = select.clone().count(&self.db).await? as i64;

        let items: Vec<CustomerResponse> = select
            .order_by_desc(customers::Column::CreatedAt)
            .offset(params.get_offset())
            .limit(u64::from(params.get_limit()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(CustomerResponse::from)
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_customer(&self, id: i64) -> AppResult<CustomerDetailResponse> {
        let customer = customers::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Customer {id} not found")))?;

        let total_orders = orders::Entity::find()
            .filter(orders::Column::CustomerId.eq(id))
            .count(&self.db)
            .await? as i64;

        Ok(CustomerDetailResponse {
            customer: CustomerResponse::from(customer),
            total_orders,
        })
    }
}
