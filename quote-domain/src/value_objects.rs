// Domain value objects
pub mod customer_type;

pub use customer_type::*;
