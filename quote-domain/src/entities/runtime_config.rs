// Runtime configuration shared through AppState

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_streams_per_quote: usize,
}
