// Pricing entities
// Input and output records for the KVG fee calculation

use serde::{Deserialize, Serialize};

/// One camera or camera-group line item in a quote.
///
/// Counts are carried as signed integers so that malformed payloads reach
/// the validator and come back as field-level errors instead of a bare
/// deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub quantity: i64,
    #[serde(default)]
    pub event_volume: i64,
    #[serde(default)]
    pub patrols_per_week: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub customer_type: String,
    #[serde(default)]
    pub streams: Vec<Stream>,
    #[serde(default)]
    pub voc_escalations: i64,
    #[serde(default)]
    pub dispatch_responses: i64,
    #[serde(default)]
    pub gdods_patrols: i64,
    #[serde(default)]
    pub sgpp_patrols: i64,
    #[serde(default)]
    pub forensic_investigations: i64,
    #[serde(default)]
    pub app_users: i64,
    #[serde(default)]
    pub audio_devices: i64,
}

/// Fee breakdown for one pricing input. Recomputed from scratch on every
/// call; carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub total_cameras: i64,
    pub total_events: i64,
    pub event_tier: String,
    pub event_fee: f64,
    pub patrols_per_month: i64,
    pub patrol_hours: f64,
    pub patrol_fee: f64,
    pub additional_fees: f64,
    pub total_fee: f64,
    pub minimum_fee_applied: bool,
    pub approval_needed: bool,
}
