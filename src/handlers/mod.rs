pub mod analytics;
pub mod checkout;
pub mod customer;
pub mod order;
pub mod product;

pub use analytics::analytics_config;
pub use checkout::checkout_config;
pub use customer::customer_config;
pub use order::order_config;
pub use product::product_config;
