use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{
    customer_entity as customers, design_entity as designs,
    design_object_entity as design_objects, order_entity as orders,
    product_entity as products, product_kustom_entity as product_kustoms, OrderStatus,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{PaginatedResponse, PaginationParams};

/// Allowed lifecycle moves: PENDING -> PROCESSING -> COMPLETED, with
/// cancellation from any non-terminal state.
pub fn is_valid_transition(from: OrderStatus, to: OrderStatus) -> bool {
    matches!(
        (from, to),
        (OrderStatus::Pending, OrderStatus::Processing)
            | (OrderStatus::Processing, OrderStatus::Completed)
            | (OrderStatus::Pending, OrderStatus::Cancelled)
            | (OrderStatus::Processing, OrderStatus::Cancelled)
    )
}

#[derive(Clone)]
pub struct OrderService {
    db: DatabaseConnection,
}

impl OrderService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_orders(
        &self,
        query: &OrderQuery,
    ) -> AppResult<PaginatedResponse<OrderResponse>> {
        let params = PaginationParams::new(query.page, query.limit);

        let mut select = orders::Entity::find();

        if let Some(status) = query.status {
            select = select.filter(orders::Column::Status.eq(status));
        }

        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            // Search by customer name goes through a customer-id prefetch so
            // the main query stays join-free.
            let customer_ids: Vec<i64> = customers::Entity::find()
                .filter(customers::Column::Name.contains(search))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|c| c.id)
                .collect();

            select = select.filter(
                Condition::any()
                    .add(orders::Column::OrderId.contains(search))
                    .add(orders::Column::CustomerId.is_in(customer_ids)),
            );
        }

        let total = select.clone().count(&self.db).await? as i64;

        let page = select
            .order_by_desc(orders::Column::CreatedAt)
            .offset(params.get_offset())
            .limit(u64::from(params.get_limit()))
            .all(&self.db)
            .await?;

        let names = self.product_names(&page).await?;
        let items = page
            .into_iter()
            .map(|order| {
                let name = names.get(&order.id).cloned();
                OrderResponse::from_model(order, name)
            })
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    /// Lookup by the client-supplied order id, including the design payload
    /// for kustom orders.
    pub async fn get_order(&self, order_id: &str) -> AppResult<OrderDetailResponse> {
        let order = orders::Entity::find()
            .filter(orders::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {order_id} not found")))?;

        let customer = customers::Entity::find_by_id(order.customer_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let product_name = if let Some(product_id) = &order.product_id {
            products::Entity::find_by_id(product_id.clone())
                .one(&self.db)
                .await?
                .map(|p| p.name)
        } else if let Some(kustom_id) = order.product_kustom_id {
            product_kustoms::Entity::find_by_id(kustom_id)
                .one(&self.db)
                .await?
                .map(|k| k.name)
        } else {
            None
        };

        let design = match designs::Entity::find()
            .filter(designs::Column::OrderId.eq(order.id))
            .one(&self.db)
            .await?
        {
            Some(design) => {
                let objects = design_objects::Entity::find()
                    .filter(design_objects::Column::DesignId.eq(design.id))
                    .all(&self.db)
                    .await?;
                Some(DesignResponse::from_model(design, objects))
            }
            None => None,
        };

        Ok(OrderDetailResponse {
            id: order.id,
            order_id: order.order_id,
            status: order.status,
            product_name,
            quantity: order.quantity,
            total_amount: order.total_amount,
            customer: CustomerSummary {
                name: customer.name,
                email: customer.email,
            },
            design,
            created_at: order.created_at,
        })
    }

    pub async fn update_status(
        &self,
        order_id: &str,
        new_status: OrderStatus,
    ) -> AppResult<OrderResponse> {
        let order = orders::Entity::find()
            .filter(orders::Column::OrderId.eq(order_id))
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order {order_id} not found")))?;

        if !is_valid_transition(order.status, new_status) {
            return Err(AppError::ValidationError(format!(
                "Cannot change order status from {:?} to {:?}",
                order.status, new_status
            )));
        }

        let mut model = order.into_active_model();
        model.status = Set(new_status);
        model.updated_at = Set(Utc::now());
        let updated = model.update(&self.db).await?;

        let names = self.product_names(std::slice::from_ref(&updated)).await?;
        let name = names.get(&updated.id).cloned();
        Ok(OrderResponse::from_model(updated, name))
    }

    /// Batched name resolution for a page of orders: one query per product
    /// kind instead of one per row.
    async fn product_names(
        &self,
        page: &[orders::Model],
    ) -> AppResult<HashMap<i64, String>> {
        let product_ids: Vec<String> = page.iter().filter_map(|o| o.product_id.clone()).collect();
        let kustom_ids: Vec<i64> = page.iter().filter_map(|o| o.product_kustom_id).collect();

        let mut product_names: HashMap<String, String> = HashMap::new();
        if !product_ids.is_empty() {
            for product in products::Entity::find()
                .filter(products::Column::Id.is_in(product_ids))
                .all(&self.db)
                .await?
            {
                product_names.insert(product.id, product.name);
            }
        }

        let mut kustom_names: HashMap<i64, String> = HashMap::new();
        if !kustom_ids.is_empty() {
            for kustom in product_kustoms::Entity::find()
                .filter(product_kustoms::Column::Id.is_in(kustom_ids))
                .all(&self.db)
                .await?
            {
                kustom_names.insert(kustom.id, kustom.name);
            }
        }

        let mut names = HashMap::new();
        for order in page {
            let name = order
                .product_id
                .as_ref()
                .and_then(|id| product_names.get(id).cloned())
                .or_else(|| {
                    order
                        .product_kustom_id
                        .and_then(|id| kustom_names.get(&id).cloned())
                });
            if let Some(name) = name {
                names.insert(order.id, name);
            }
        }

        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_transitions_allowed() {
        assert!(is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Processing
        ));
        assert!(is_valid_transition(
            OrderStatus::Processing,
            OrderStatus::Completed
        ));
    }

    #[test]
    fn test_cancellation_from_non_terminal_states() {
        assert!(is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Cancelled
        ));
        assert!(is_valid_transition(
            OrderStatus::Processing,
            OrderStatus::Cancelled
        ));
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        assert!(!is_valid_transition(
            OrderStatus::Pending,
            OrderStatus::Completed
        ));
        assert!(!is_valid_transition(
            OrderStatus::Completed,
            OrderStatus::Cancelled
        ));
        assert!(!is_valid_transition(
            OrderStatus::Cancelled,
            OrderStatus::Pending
        ));
        assert!(!is_valid_transition(
            OrderStatus::Completed,
            OrderStatus::Processing
        ));
    }
}
