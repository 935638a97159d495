pub mod ops_handlers;
pub mod pricing_handlers;
pub mod quote_handlers;

pub use ops_handlers::*;
pub use pricing_handlers::*;
pub use quote_handlers::*;
