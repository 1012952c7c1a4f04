use chrono::Utc;
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use serde_json::json;

use kustomtee_backend::entities::{
    customer_entity as customers, design_entity as designs,
    design_object_entity as design_objects, order_entity as orders,
    product_entity as products, product_kustom_entity as product_kustoms, OrderStatus,
};
use kustomtee_backend::error::AppError;
use kustomtee_backend::models::CheckoutRequest;
use kustomtee_backend::services::{
    is_valid_transition, CheckoutService, OrderService, DEFAULT_KUSTOM_PRICE,
};

async fn setup_db() -> DatabaseConnection {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

async fn seed_product(db: &DatabaseConnection, id: &str, price: i64, stock: i32) {
    let now = Utc::now();
    products::ActiveModel {
        id: Set(id.to_string()),
        name: Set(format!("Product {id}")),
        price: Set(price),
        stock: Set(stock),
        category: Set(Some("tshirt".to_string())),
        size: Set(Some("L".to_string())),
        images: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(db)
    .await
    .expect("seed product");
}

fn kustom_request(order_id: &str, objects: serde_json::Value) -> CheckoutRequest {
    let total = objects.as_array().map(|a| a.len()).unwrap_or(0);
    serde_json::from_value(json!({
        "productType": "kustom",
        "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
        "productKustom": {"modelId": "M1", "modelName": "Tee", "modelUrl": "u"},
        "design": {"objects": objects},
        "metadata": {"orderId": order_id, "totalObjects": total}
    }))
    .expect("valid kustom payload")
}

fn regular_request(order_id: &str, product_id: &str, quantity: i32, total: i64) -> CheckoutRequest {
    serde_json::from_value(json!({
        "productType": "regular",
        "customer": {"name": "Jane", "email": "jane@x.com", "phone": "08123", "address": "Jl. A"},
        "product": {"id": product_id, "price": 50000},
        "orderDetails": {"quantity": quantity, "orderId": order_id, "totalAmount": total}
    }))
    .expect("valid regular payload")
}

#[tokio::test]
async fn kustom_checkout_creates_order_design_and_objects() {
    let db = setup_db().await;
    let service = CheckoutService::new(db.clone());

    let objects = json!([
        {"type": "text", "text": "hello", "left": 10.0, "top": 20.0},
        {"type": "rect", "width": 50.0, "height": 30.0, "fill": "#000000"},
        {"type": "image", "src": "https://cdn.example.com/logo.png"}
    ]);
    let response = service
        .process_checkout("auth0|jane", kustom_request("ORD-1", objects))
        .await
        .expect("checkout succeeds");

    assert_eq!(response.order_id, "ORD-1");
    assert_eq!(response.status, OrderStatus::Pending);
    assert_eq!(response.total_amount, DEFAULT_KUSTOM_PRICE);
    assert_eq!(response.product_name, "Tee");
    assert_eq!(response.customer.name, "Jane");

    let order = orders::Entity::find()
        .filter(orders::Column::OrderId.eq("ORD-1"))
        .one(&db)
        .await
        .unwrap()
        .expect("order persisted");
    assert!(order.product_kustom_id.is_some());
    assert!(order.product_id.is_none());
    assert_eq!(order.quantity, None);

    let design = designs::Entity::find()
        .filter(designs::Column::OrderId.eq(order.id))
        .one(&db)
        .await
        .unwrap()
        .expect("design persisted");
    assert_eq!(design.background_color, "#ffffff");
    assert_eq!(design.canvas_width, 400);
    assert_eq!(design.canvas_height, 400);
    assert_eq!(design.total_objects, 3);

    let object_count = design_objects::Entity::find()
        .filter(design_objects::Column::DesignId.eq(design.id))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(object_count, 3);

    // Template was auto-created with the fixed default price
    let template = product_kustoms::Entity::find()
        .filter(product_kustoms::Column::ModelId.eq("M1"))
        .one(&db)
        .await
        .unwrap()
        .expect("template upserted");
    assert_eq!(template.price, DEFAULT_KUSTOM_PRICE);
}

#[tokio::test]
async fn kustom_checkout_with_empty_design_still_creates_design_row() {
    let db = setup_db().await;
    let service = CheckoutService::new(db.clone());

    let response = service
        .process_checkout("auth0|jane", kustom_request("ORD-1", json!([])))
        .await
        .expect("checkout succeeds");
    assert_eq!(response.order_id, "ORD-1");

    assert_eq!(designs::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(design_objects::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn regular_checkout_decrements_stock() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 5).await;
    let service = CheckoutService::new(db.clone());

    let response = service
        .process_checkout("auth0|jane", regular_request("ORD-2", "P1", 3, 150000))
        .await
        .expect("checkout succeeds");

    assert_eq!(response.order_id, "ORD-2");
    assert_eq!(response.total_amount, 150000);

    let product = products::Entity::find_by_id("P1".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.stock, 2);

    let order = orders::Entity::find()
        .filter(orders::Column::OrderId.eq("ORD-2"))
        .one(&db)
        .await
        .unwrap()
        .expect("order persisted");
    assert_eq!(order.quantity, Some(3));
    assert_eq!(order.total_amount, 150000);
    assert_eq!(order.status, OrderStatus::Pending);
}

#[tokio::test]
async fn insufficient_stock_aborts_whole_transaction() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 1).await;
    let service = CheckoutService::new(db.clone());

    let err = service
        .process_checkout("auth0|jane", regular_request("ORD-3", "P1", 2, 100000))
        .await
        .expect_err("checkout must fail");

    assert!(matches!(err, AppError::InsufficientStock));
    assert_eq!(err.to_string(), "Insufficient stock");

    // Nothing was persisted, stock unchanged
    let product = products::Entity::find_by_id("P1".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.stock, 1);
    assert_eq!(orders::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(customers::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn missing_product_fails_with_not_found() {
    let db = setup_db().await;
    let service = CheckoutService::new(db.clone());

    let err = service
        .process_checkout("auth0|jane", regular_request("ORD-4", "NOPE", 1, 50000))
        .await
        .expect_err("checkout must fail");

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(orders::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn validation_failure_short_circuits_before_persistence() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 5).await;
    let service = CheckoutService::new(db.clone());

    let request: CheckoutRequest = serde_json::from_value(json!({
        "productType": "regular",
        "customer": {"name": "Jane", "email": "broken", "phone": "08123", "address": "Jl. A"},
        "product": {"id": "P1"},
        "orderDetails": {"quantity": 0, "orderId": "ORD-5", "totalAmount": 0}
    }))
    .unwrap();

    let err = service
        .process_checkout("auth0|jane", request)
        .await
        .expect_err("checkout must fail");

    let AppError::ValidationErrors(errors) = err else {
        panic!("expected field-level validation errors");
    };
    let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"customer.email"));
    assert!(fields.contains(&"orderDetails.quantity"));

    assert_eq!(customers::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(orders::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn repeat_checkout_upserts_customer_last_write_wins() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 10).await;
    let service = CheckoutService::new(db.clone());

    service
        .process_checkout("auth0|jane", regular_request("ORD-6", "P1", 1, 50000))
        .await
        .expect("first checkout");

    let second: CheckoutRequest = serde_json::from_value(json!({
        "productType": "regular",
        "customer": {"name": "Jane Doe", "email": "jane.doe@x.com", "phone": "08999", "address": "Jl. B", "notes": "ring the bell"},
        "product": {"id": "P1"},
        "orderDetails": {"quantity": 1, "orderId": "ORD-7", "totalAmount": 50000}
    }))
    .unwrap();
    service
        .process_checkout("auth0|jane", second)
        .await
        .expect("second checkout");

    let all = customers::Entity::find().all(&db).await.unwrap();
    assert_eq!(all.len(), 1, "same identity must not duplicate customers");
    let customer = &all[0];
    assert_eq!(customer.name, "Jane Doe");
    assert_eq!(customer.email, "jane.doe@x.com");
    assert_eq!(customer.phone, "08999");
    assert_eq!(customer.address, "Jl. B");
    assert_eq!(customer.notes.as_deref(), Some("ring the bell"));

    assert_eq!(orders::Entity::find().count(&db).await.unwrap(), 2);
}

#[tokio::test]
async fn order_id_round_trips_through_lookup() {
    let db = setup_db().await;
    let checkout = CheckoutService::new(db.clone());
    let orders_svc = OrderService::new(db.clone());

    let objects = json!([{"type": "text", "text": "hi"}]);
    checkout
        .process_checkout("auth0|jane", kustom_request("ORD-8", objects))
        .await
        .expect("checkout succeeds");

    let detail = orders_svc.get_order("ORD-8").await.expect("lookup");
    assert_eq!(detail.order_id, "ORD-8");
    assert_eq!(detail.status, OrderStatus::Pending);
    assert_eq!(detail.product_name.as_deref(), Some("Tee"));
    assert_eq!(detail.customer.name, "Jane");

    let design = detail.design.expect("kustom order carries its design");
    assert_eq!(design.objects.len(), 1);
    assert_eq!(design.objects[0].object_type, "text");
}

#[tokio::test]
async fn status_updates_follow_the_lifecycle() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 5).await;
    let checkout = CheckoutService::new(db.clone());
    let orders_svc = OrderService::new(db.clone());

    checkout
        .process_checkout("auth0|jane", regular_request("ORD-9", "P1", 1, 50000))
        .await
        .expect("checkout succeeds");

    // Skipping PROCESSING is not allowed
    let err = orders_svc
        .update_status("ORD-9", OrderStatus::Completed)
        .await
        .expect_err("invalid transition");
    assert!(matches!(err, AppError::ValidationError(_)));

    let updated = orders_svc
        .update_status("ORD-9", OrderStatus::Processing)
        .await
        .expect("valid transition");
    assert_eq!(updated.status, OrderStatus::Processing);

    let updated = orders_svc
        .update_status("ORD-9", OrderStatus::Completed)
        .await
        .expect("valid transition");
    assert_eq!(updated.status, OrderStatus::Completed);

    assert!(!is_valid_transition(
        OrderStatus::Completed,
        OrderStatus::Cancelled
    ));
}

#[tokio::test]
async fn duplicate_order_id_is_rejected_by_constraint() {
    let db = setup_db().await;
    seed_product(&db, "P1", 50000, 10).await;
    let service = CheckoutService::new(db.clone());

    service
        .process_checkout("auth0|jane", regular_request("ORD-10", "P1", 1, 50000))
        .await
        .expect("first checkout");

    let err = service
        .process_checkout("auth0|jane", regular_request("ORD-10", "P1", 1, 50000))
        .await
        .expect_err("duplicate order id must fail");
    assert!(matches!(err, AppError::DatabaseError(_)));

    // The failed attempt rolled back its stock decrement
    let product = products::Entity::find_by_id("P1".to_string())
        .one(&db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(product.stock, 9);
    assert_eq!(orders::Entity::find().count(&db).await.unwrap(), 1);
}
