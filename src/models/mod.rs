pub mod analytics;
pub mod checkout;
pub mod common;
pub mod customer;
pub mod order;
pub mod product;

pub use analytics::*;
pub use checkout::*;
pub use common::*;
pub use customer::*;
pub use order::*;
pub use product::*;
