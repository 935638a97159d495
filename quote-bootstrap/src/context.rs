use std::sync::Arc;

use anyhow::Result;

use quote_application::{AppState, Metrics};
use quote_infrastructure::{AppConfig, InMemoryQuoteRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let state = AppState {
            config: runtime_config,
            quote_repo: Arc::new(InMemoryQuoteRepository::new()),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
