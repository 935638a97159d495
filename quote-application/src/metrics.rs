use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    preview_requests: AtomicU64,
    validation_failures: AtomicU64,
    quotes_created: AtomicU64,
    quotes_updated: AtomicU64,
    quotes_deleted: AtomicU64,
}

impl Metrics {
    pub fn record_preview(&self) {
        self.preview_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quote_created(&self) {
        self.quotes_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quote_updated(&self) {
        self.quotes_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_quote_deleted(&self) {
        self.quotes_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let previews = self.preview_requests.load(Ordering::Relaxed);
        let failures = self.validation_failures.load(Ordering::Relaxed);
        let created = self.quotes_created.load(Ordering::Relaxed);
        let updated = self.quotes_updated.load(Ordering::Relaxed);
        let deleted = self.quotes_deleted.load(Ordering::Relaxed);

        format!(
            "# TYPE kvg_preview_requests_total counter\n\
kvg_preview_requests_total {}\n\
# TYPE kvg_validation_failures_total counter\n\
kvg_validation_failures_total {}\n\
# TYPE kvg_quotes_created_total counter\n\
kvg_quotes_created_total {}\n\
# TYPE kvg_quotes_updated_total counter\n\
kvg_quotes_updated_total {}\n\
# TYPE kvg_quotes_deleted_total counter\n\
kvg_quotes_deleted_total {}\n",
            previews, failures, created, updated, deleted
        )
    }
}
