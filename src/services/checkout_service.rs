use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};

use crate::entities::{
    customer_entity as customers, design_entity as designs,
    design_object_entity as design_objects, order_entity as orders,
    product_entity as products, product_kustom_entity as product_kustoms,
    user_entity as users, OrderStatus,
};
use crate::error::{AppError, AppResult};
use crate::models::*;

/// Price snapshotted into the order when a kustom template is auto-created.
pub const DEFAULT_KUSTOM_PRICE: i64 = 150_000;

#[derive(Clone)]
pub struct CheckoutService {
    db: DatabaseConnection,
}

impl CheckoutService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs one checkout request as a single transaction: user and customer
    /// upsert, then the variant-specific order writes. Everything commits or
    /// nothing does.
    pub async fn process_checkout(
        &self,
        external_id: &str,
        request: CheckoutRequest,
    ) -> AppResult<CheckoutResponse> {
        let errors = request.validate();
        if !errors.is_empty() {
            return Err(AppError::ValidationErrors(errors));
        }

        let txn = self.db.begin().await?;
        let now = Utc::now();

        let user = self.resolve_user(&txn, external_id, request.customer(), now).await?;
        let customer = self.upsert_customer(&txn, user.id, request.customer(), now).await?;

        let response = match &request {
            CheckoutRequest::Kustom(payload) => {
                self.checkout_kustom(&txn, &customer, payload, now).await?
            }
            CheckoutRequest::Regular(payload) => {
                self.checkout_regular(&txn, &customer, payload, now).await?
            }
        };

        txn.commit().await?;

        log::info!(
            "Checkout committed: order_id={} total={}",
            response.order_id,
            response.total_amount
        );

        Ok(response)
    }

    async fn resolve_user(
        &self,
        txn: &DatabaseTransaction,
        external_id: &str,
        contact: &CustomerPayload,
        now: DateTime<Utc>,
    ) -> AppResult<users::Model> {
        let existing = users::Entity::find()
            .filter(users::Column::ExternalId.eq(external_id))
            .one(txn)
            .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = users::ActiveModel {
            external_id: Set(external_id.to_string()),
            email: Set(Some(contact.email.clone())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok(user)
    }

    /// Find-or-create the Customer for this user; contact fields are
    /// overwritten with the latest submitted values (last write wins).
    async fn upsert_customer(
        &self,
        txn: &DatabaseTransaction,
        user_id: i64,
        contact: &CustomerPayload,
        now: DateTime<Utc>,
    ) -> AppResult<customers::Model> {
        let existing = customers::Entity::find()
            .filter(customers::Column::UserId.eq(user_id))
            .one(txn)
            .await?;

        let customer = match existing {
            Some(existing) => {
                let mut model = existing.into_active_model();
                model.name = Set(contact.name.clone());
                model.email = Set(contact.email.clone());
                model.phone = Set(contact.phone.clone());
                model.address = Set(contact.address.clone());
                model.notes = Set(contact.notes.clone());
                model.updated_at = Set(now);
                model.update(txn).await?
            }
            None => {
                customers::ActiveModel {
                    user_id: Set(user_id),
                    name: Set(contact.name.clone()),
                    email: Set(contact.email.clone()),
                    phone: Set(contact.phone.clone()),
                    address: Set(contact.address.clone()),
                    notes: Set(contact.notes.clone()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(txn)
                .await?
            }
        };

        Ok(customer)
    }

    async fn checkout_kustom(
        &self,
        txn: &DatabaseTransaction,
        customer: &customers::Model,
        payload: &KustomCheckout,
        now: DateTime<Utc>,
    ) -> AppResult<CheckoutResponse> {
        let template = match product_kustoms::Entity::find()
            .filter(product_kustoms::Column::ModelId.eq(payload.product_kustom.model_id.as_str()))
            .one(txn)
            .await?
        {
            Some(template) => template,
            None => {
                product_kustoms::ActiveModel {
                    model_id: Set(payload.product_kustom.model_id.clone()),
                    name: Set(payload.product_kustom.model_name.clone()),
                    model_url: Set(payload.product_kustom.model_url.clone()),
                    preview_url: Set(payload.product_kustom.preview_url.clone()),
                    uv_map_url: Set(payload.product_kustom.uv_map_url.clone()),
                    price: Set(DEFAULT_KUSTOM_PRICE),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(txn)
                .await?
            }
        };

        let order = orders::ActiveModel {
            order_id: Set(payload.metadata.order_id.clone()),
            customer_id: Set(customer.id),
            product_id: Set(None),
            product_kustom_id: Set(Some(template.id)),
            status: Set(OrderStatus::Pending),
            quantity: Set(None),
            total_amount: Set(template.price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let design = designs::ActiveModel {
            order_id: Set(order.id),
            canvas: Set(payload.design.canvas.clone()),
            preview_image: Set(payload.design.preview_image.clone()),
            background_color: Set(payload.design.background_color.clone()),
            decal_color: Set(payload.design.decal_color.clone()),
            canvas_width: Set(payload.metadata.canvas_width),
            canvas_height: Set(payload.metadata.canvas_height),
            uv_guide: Set(payload.metadata.uv_guide),
            total_objects: Set(payload.metadata.total_objects),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        if !payload.design.objects.is_empty() {
            let rows: Vec<design_objects::ActiveModel> = payload
                .design
                .objects
                .iter()
                .map(|o| design_objects::ActiveModel {
                    design_id: Set(design.id),
                    object_type: Set(o.object_type.clone()),
                    left: Set(o.left),
                    top: Set(o.top),
                    width: Set(o.width),
                    height: Set(o.height),
                    angle: Set(o.angle),
                    scale_x: Set(o.scale_x),
                    scale_y: Set(o.scale_y),
                    fill: Set(o.fill.clone()),
                    stroke: Set(o.stroke.clone()),
                    text: Set(o.text.clone()),
                    font_family: Set(o.font_family.clone()),
                    font_size: Set(o.font_size),
                    src: Set(o.src.clone()),
                    extra: Set(o.extra.clone()),
                    ..Default::default()
                })
                .collect();
            design_objects::Entity::insert_many(rows).exec(txn).await?;
        }

        Ok(CheckoutResponse {
            order_id: order.order_id,
            status: order.status,
            total_amount: order.total_amount,
            customer: CustomerSummary {
                name: customer.name.clone(),
                email: customer.email.clone(),
            },
            product_name: template.name,
        })
    }

    async fn checkout_regular(
        &self,
        txn: &DatabaseTransaction,
        customer: &customers::Model,
        payload: &RegularCheckout,
        now: DateTime<Utc>,
    ) -> AppResult<CheckoutResponse> {
        let product = products::Entity::find_by_id(payload.product.id.clone())
            .one(txn)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Product {} not found", payload.product.id))
            })?;

        let quantity = payload.order_details.quantity;

        // Conditional decrement in a single statement so two concurrent
        // checkouts cannot both pass a read-then-write stock check.
        let result = products::Entity::update_many()
            .col_expr(
                products::Column::Stock,
                Expr::col(products::Column::Stock).sub(quantity),
            )
            .col_expr(products::Column::UpdatedAt, Expr::value(now))
            .filter(products::Column::Id.eq(payload.product.id.as_str()))
            .filter(products::Column::Stock.gte(quantity))
            .exec(txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::InsufficientStock);
        }

        let order = orders::ActiveModel {
            order_id: Set(payload.order_details.order_id.clone()),
            customer_id: Set(customer.id),
            product_id: Set(Some(product.id.clone())),
            product_kustom_id: Set(None),
            status: Set(OrderStatus::Pending),
            quantity: Set(Some(quantity)),
            total_amount: Set(payload.order_details.total_amount),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        Ok(CheckoutResponse {
            order_id: order.order_id,
            status: order.status,
            total_amount: order.total_amount,
            customer: CustomerSummary {
                name: customer.name.clone(),
                email: customer.email.clone(),
            },
            product_name: product.name,
        })
    }
}
