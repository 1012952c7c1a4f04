pub mod analytics_service;
pub mod checkout_service;
pub mod customer_service;
pub mod order_service;
pub mod product_service;
pub mod temp_checkout_service;

pub use analytics_service::*;
pub use checkout_service::*;
pub use customer_service::*;
pub use order_service::*;
pub use product_service::*;
pub use temp_checkout_service::*;
