// Domain services
pub mod pricing;
pub mod validation;

pub use pricing::*;
pub use validation::*;
