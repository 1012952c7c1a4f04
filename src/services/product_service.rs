use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::{
    order_entity as orders, product_entity as products,
    product_kustom_entity as product_kustoms,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{PaginatedResponse, PaginationParams};

#[derive(Clone)]
pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_products(
        &self,
        query: &ProductQuery,
    ) -> AppResult<PaginatedResponse<ProductResponse>> {
        let params = PaginationParams::new(query.page, query.limit);

        let mut select = products::Entity::find();

        if let Some(category) = query.category.as_deref().filter(|c| !c.trim().is_empty()) {
            select = select.filter(products::Column::Category.eq(category));
        }
        if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
            select = select.filter(products::Column::Name.contains(search));
        }

        let total = select.clone().count(&self.db).await? as i64;

        let items: Vec<ProductResponse> = select
            .order_by_desc(products::Column::CreatedAt)
            .offset(params.get_offset())
            .limit(u64::from(params.get_limit()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(ProductResponse::from)
            .collect();

        Ok(PaginatedResponse::new(items, &params, total))
    }

    pub async fn get_product(&self, id: &str) -> AppResult<ProductResponse> {
        let product = products::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))?;

        Ok(ProductResponse::from(product))
    }

    pub async fn create_product(
        &self,
        request: CreateProductRequest,
    ) -> AppResult<ProductResponse> {
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }
        if request.price < 0 || request.stock < 0 {
            return Err(AppError::ValidationError(
                "Price and stock must not be negative".to_string(),
            ));
        }

        let now = Utc::now();
        let product = products::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(request.name),
            price: Set(request.price),
            stock: Set(request.stock),
            category: Set(request.category),
            size: Set(request.size),
            images: Set(Some(serde_json::json!(request.images))),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        Ok(ProductResponse::from(product))
    }

    pub async fn update_product(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let mut model = products::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))?
            .into_active_model();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(price) = request.price {
            if price < 0 {
                return Err(AppError::ValidationError(
                    "Price must not be negative".to_string(),
                ));
            }
            model.price = Set(price);
        }
        if let Some(stock) = request.stock {
            if stock < 0 {
                return Err(AppError::ValidationError(
                    "Stock must not be negative".to_string(),
                ));
            }
            model.stock = Set(stock);
        }
        if let Some(category) = request.category {
            model.category = Set(Some(category));
        }
        if let Some(size) = request.size {
            model.size = Set(Some(size));
        }
        if let Some(images) = request.images {
            model.images = Set(Some(serde_json::json!(images)));
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&self.db).await?;
        Ok(ProductResponse::from(updated))
    }

    pub async fn delete_product(&self, id: &str) -> AppResult<()> {
        let product = products::Entity::find_by_id(id.to_string())
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {id} not found")))?;

        // Orders keep a snapshot reference; deleting the product from under
        // them would break those rows.
        let referencing_orders = orders::Entity::find()
            .filter(orders::Column::ProductId.eq(product.id.as_str()))
            .count(&self.db)
            .await?;
        if referencing_orders > 0 {
            return Err(AppError::ValidationError(
                "Product has existing orders and cannot be deleted".to_string(),
            ));
        }

        products::Entity::delete_by_id(product.id).exec(&self.db).await?;
        Ok(())
    }

    pub async fn list_kustom_products(
        &self,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<KustomProductResponse>> {
        let select = product_kustoms::Entity::find();

        let total = select.clone().count(&self.db).await? as i64;

        let items: Vec<KustomProductResponse> = select
            .order_by_desc(product_kustoms::Column::CreatedAt)
            .offset(params.get_offset())
            .limit(u64::from(params.get_limit()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(KustomProductResponse::from)
            .collect();

        Ok(PaginatedResponse::new(items, params, total))
    }
}
