pub mod pricing;
pub mod quote;
pub mod runtime_config;

pub use pricing::*;
pub use quote::*;
pub use runtime_config::*;
