// Quote entity
// A saved site-survey quote with its pricing snapshot

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PricingInput, PricingResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub customer_name: String,
    pub site_address: String,
    pub input: PricingInput,
    pub pricing: PricingResult,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-facing payload for create/replace. The pricing snapshot is never
/// accepted from the wire; the server recomputes it from `input`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotePayload {
    pub customer_name: String,
    #[serde(default)]
    pub site_address: String,
    pub input: PricingInput,
}

impl QuotePayload {
    pub fn normalized(&self) -> Self {
        Self {
            customer_name: self.customer_name.trim().to_string(),
            site_address: self.site_address.trim().to_string(),
            input: self.input.clone(),
        }
    }
}

impl Quote {
    pub fn from_payload(
        id: Uuid,
        payload: QuotePayload,
        pricing: PricingResult,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_name: payload.customer_name,
            site_address: payload.site_address,
            input: payload.input,
            pricing,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteListQuery {
    pub customer: Option<String>,
}
