use quote_domain::services::compute_pricing;
use quote_domain::{PricingInput, PricingResult};

use crate::AppError;
use crate::AppState;

/// Prices an input after the request-level guards, shared by the preview
/// endpoint and the quote write path.
pub(crate) fn price_input(
    state: &AppState,
    input: &PricingInput,
) -> Result<PricingResult, AppError> {
    if input.streams.len() > state.config.max_streams_per_quote {
        return Err(AppError::BadRequest(format!(
            "too many streams: {} exceeds limit {}",
            input.streams.len(),
            state.config.max_streams_per_quote
        )));
    }
    compute_pricing(input).map_err(|err| {
        state.metrics.record_validation_failure();
        AppError::from(err)
    })
}

pub async fn preview_pricing(
    state: &AppState,
    input: PricingInput,
) -> Result<PricingResult, AppError> {
    state.metrics.record_preview();
    price_input(state, &input)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quote_domain::{RuntimeConfig, Stream};

    use super::*;
    use crate::Metrics;

    struct NoopRepo;

    #[async_trait::async_trait]
    impl quote_domain::ports::QuoteRepository for NoopRepo {
        async fn insert(&self, _quote: &quote_domain::Quote) -> anyhow::Result<()> {
            Ok(())
        }
        async fn fetch(&self, _id: uuid::Uuid) -> anyhow::Result<Option<quote_domain::Quote>> {
            Ok(None)
        }
        async fn fetch_all(&self, _customer: Option<&str>) -> anyhow::Result<Vec<quote_domain::Quote>> {
            Ok(Vec::new())
        }
        async fn replace(&self, _quote: &quote_domain::Quote) -> anyhow::Result<bool> {
            Ok(false)
        }
        async fn remove(&self, _id: uuid::Uuid) -> anyhow::Result<bool> {
            Ok(false)
        }
        async fn ping(&self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn test_state(max_streams: usize) -> AppState {
        AppState {
            config: RuntimeConfig {
                bind_addr: "127.0.0.1:0".to_string(),
                api_token: None,
                max_body_bytes: 1024,
                request_timeout_seconds: 5,
                max_streams_per_quote: max_streams,
            },
            quote_repo: Arc::new(NoopRepo),
            metrics: Arc::new(Metrics::default()),
        }
    }

    fn single_stream_input() -> PricingInput {
        PricingInput {
            customer_type: "new".to_string(),
            streams: vec![Stream {
                quantity: 1,
                event_volume: 100,
                patrols_per_week: 0,
            }],
            voc_escalations: 0,
            dispatch_responses: 0,
            gdods_patrols: 0,
            sgpp_patrols: 0,
            forensic_investigations: 0,
            app_users: 0,
            audio_devices: 0,
        }
    }

    #[tokio::test]
    async fn preview_prices_a_valid_input() {
        let state = test_state(16);
        let result = preview_pricing(&state, single_stream_input())
            .await
            .expect("preview");
        assert_eq!(result.total_events, 100);
        assert_eq!(result.event_fee, 625.0);
    }

    #[tokio::test]
    async fn preview_rejects_oversized_stream_list() {
        let state = test_state(0);
        let err = preview_pricing(&state, single_stream_input())
            .await
            .expect_err("reject");
        match err {
            AppError::BadRequest(message) => assert!(message.contains("too many streams")),
            _ => panic!("unexpected error type"),
        }
    }

    #[tokio::test]
    async fn preview_surfaces_field_errors() {
        let state = test_state(16);
        let mut input = single_stream_input();
        input.customer_type = "trial".to_string();
        let err = preview_pricing(&state, input).await.expect_err("reject");
        match err {
            AppError::Validation(fields) => assert_eq!(fields[0].field, "customerType"),
            _ => panic!("unexpected error type"),
        }
    }
}
