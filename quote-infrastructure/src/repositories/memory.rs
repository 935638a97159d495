// In-memory quote store
// Backs the QuoteRepository port until a relational store lands; the port
// is the only seam the rest of the app sees.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quote_domain::ports::QuoteRepository;
use quote_domain::Quote;

#[derive(Debug, Default)]
pub struct InMemoryQuoteRepository {
    quotes: RwLock<HashMap<Uuid, Quote>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn insert(&self, quote: &Quote) -> anyhow::Result<()> {
        self.quotes.write().await.insert(quote.id, quote.clone());
        Ok(())
    }

    async fn fetch(&self, id: Uuid) -> anyhow::Result<Option<Quote>> {
        Ok(self.quotes.read().await.get(&id).cloned())
    }

    async fn fetch_all(&self, customer: Option<&str>) -> anyhow::Result<Vec<Quote>> {
        let needle = customer.map(|value| value.to_lowercase());
        let guard = self.quotes.read().await;
        let mut quotes: Vec<Quote> = guard
            .values()
            .filter(|quote| match &needle {
                Some(needle) => quote.customer_name.to_lowercase().contains(needle),
                None => true,
            })
            .cloned()
            .collect();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quotes)
    }

    async fn replace(&self, quote: &Quote) -> anyhow::Result<bool> {
        let mut guard = self.quotes.write().await;
        match guard.get_mut(&quote.id) {
            Some(slot) => {
                *slot = quote.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: Uuid) -> anyhow::Result<bool> {
        Ok(self.quotes.write().await.remove(&id).is_some())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use quote_domain::services::compute_pricing;
    use quote_domain::{PricingInput, QuotePayload};

    use super::*;

    fn sample_quote(customer: &str) -> Quote {
        let input = PricingInput {
            customer_type: "new".to_string(),
            streams: Vec::new(),
            voc_escalations: 0,
            dispatch_responses: 0,
            gdods_patrols: 0,
            sgpp_patrols: 0,
            forensic_investigations: 0,
            app_users: 0,
            audio_devices: 0,
        };
        let pricing = compute_pricing(&input).expect("pricing");
        let payload = QuotePayload {
            customer_name: customer.to_string(),
            site_address: "1 Main St".to_string(),
            input,
        };
        Quote::from_payload(Uuid::new_v4(), payload, pricing, Utc::now())
    }

    #[tokio::test]
    async fn insert_then_fetch_round_trips() {
        let repo = InMemoryQuoteRepository::new();
        let quote = sample_quote("Acme");
        repo.insert(&quote).await.expect("insert");
        let fetched = repo.fetch(quote.id).await.expect("fetch").expect("present");
        assert_eq!(fetched.customer_name, "Acme");
    }

    #[tokio::test]
    async fn fetch_all_filters_by_customer_substring() {
        let repo = InMemoryQuoteRepository::new();
        repo.insert(&sample_quote("Acme Offices")).await.expect("insert");
        repo.insert(&sample_quote("Globex")).await.expect("insert");

        let all = repo.fetch_all(None).await.expect("list");
        assert_eq!(all.len(), 2);

        let filtered = repo.fetch_all(Some("acme")).await.expect("list");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].customer_name, "Acme Offices");
    }

    #[tokio::test]
    async fn replace_reports_missing_quote() {
        let repo = InMemoryQuoteRepository::new();
        let quote = sample_quote("Acme");
        assert!(!repo.replace(&quote).await.expect("replace"));
        repo.insert(&quote).await.expect("insert");
        assert!(repo.replace(&quote).await.expect("replace"));
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_was_deleted() {
        let repo = InMemoryQuoteRepository::new();
        let quote = sample_quote("Acme");
        repo.insert(&quote).await.expect("insert");
        assert!(repo.remove(quote.id).await.expect("remove"));
        assert!(!repo.remove(quote.id).await.expect("remove"));
    }
}
