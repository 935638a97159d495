pub mod pricing_queries;
pub mod quote_queries;
