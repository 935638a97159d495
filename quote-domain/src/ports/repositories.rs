use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::Quote;

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn insert(&self, quote: &Quote) -> anyhow::Result<()>;
    async fn fetch(&self, id: Uuid) -> anyhow::Result<Option<Quote>>;
    async fn fetch_all(&self, customer: Option<&str>) -> anyhow::Result<Vec<Quote>>;
    /// Returns false when no quote with this id exists.
    async fn replace(&self, quote: &Quote) -> anyhow::Result<bool>;
    /// Returns false when no quote with this id exists.
    async fn remove(&self, id: Uuid) -> anyhow::Result<bool>;
    async fn ping(&self) -> anyhow::Result<()>;
}
