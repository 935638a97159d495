use axum::http::HeaderMap;

use quote_domain::RuntimeConfig;

/// Static bearer-token check. With no token configured the API is open.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn config_with_token(token: Option<&str>) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: token.map(|t| t.to_string()),
            max_body_bytes: 1024,
            request_timeout_seconds: 5,
            max_streams_per_quote: 16,
        }
    }

    #[test]
    fn open_when_no_token_configured() {
        assert!(authorize(&config_with_token(None), &HeaderMap::new()));
    }

    #[test]
    fn requires_matching_bearer_token() {
        let config = config_with_token(Some("secret"));
        assert!(!authorize(&config, &HeaderMap::new()));

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer wrong"));
        assert!(!authorize(&config, &headers));

        let mut headers = HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("Bearer secret"));
        assert!(authorize(&config, &headers));
    }
}
