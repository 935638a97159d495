use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use quote_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_streams_per_quote: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3430".to_string(),
            api_token: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            max_streams_per_quote: 64,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("KVG_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.max_streams_per_quote == 0 {
            return Err(anyhow!("max_streams_per_quote must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            max_streams_per_quote: self.max_streams_per_quote,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("KVG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("KVG_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("KVG_MAX_BODY_BYTES") {
            if let Ok(parsed) = value.parse() {
                self.max_body_bytes = parsed;
            }
        }
        if let Ok(value) = env::var("KVG_REQUEST_TIMEOUT_SECONDS") {
            if let Ok(parsed) = value.parse() {
                self.request_timeout_seconds = parsed;
            }
        }
        if let Ok(value) = env::var("KVG_MAX_STREAMS_PER_QUOTE") {
            if let Ok(parsed) = value.parse() {
                self.max_streams_per_quote = parsed;
            }
        }
    }
}
