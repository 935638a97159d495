use std::sync::Arc;

use quote_domain::ports::QuoteRepository;
use quote_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub quote_repo: Arc<dyn QuoteRepository>,
    pub metrics: Arc<Metrics>,
}
