pub mod customers;
pub mod design_objects;
pub mod designs;
pub mod orders;
pub mod product_kustoms;
pub mod products;
pub mod users;

pub use customers as customer_entity;
pub use design_objects as design_object_entity;
pub use designs as design_entity;
pub use orders as order_entity;
pub use product_kustoms as product_kustom_entity;
pub use products as product_entity;
pub use users as user_entity;

pub use orders::OrderStatus;
