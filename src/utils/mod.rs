pub mod jwt;
pub mod pagination;
pub mod validation;

pub use jwt::*;
pub use pagination::*;
pub use validation::is_valid_email;
