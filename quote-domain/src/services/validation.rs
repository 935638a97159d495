// Pricing input validation
// Collects every violation instead of stopping at the first one, so the
// client can highlight all offending fields in one round trip.

use serde::Serialize;
use thiserror::Error;

use crate::entities::PricingInput;
use crate::value_objects::CustomerType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("invalid pricing input")]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

/// Checks every intrinsic invariant of a pricing input. Returns the parsed
/// customer type on success so callers never re-parse the raw string.
pub fn validate_pricing_input(input: &PricingInput) -> Result<CustomerType, ValidationError> {
    let mut errors = Vec::new();

    let customer_type = match input.customer_type.parse::<CustomerType>() {
        Ok(value) => Some(value),
        Err(()) => {
            errors.push(FieldError::new(
                "customerType",
                "must be one of: new, existing",
            ));
            None
        }
    };

    for (index, stream) in input.streams.iter().enumerate() {
        if stream.quantity < 1 {
            errors.push(FieldError::new(
                format!("streams[{}].quantity", index),
                "must be a positive integer",
            ));
        }
        if stream.event_volume < 0 {
            errors.push(FieldError::new(
                format!("streams[{}].eventVolume", index),
                "must not be negative",
            ));
        }
        if stream.patrols_per_week < 0 {
            errors.push(FieldError::new(
                format!("streams[{}].patrolsPerWeek", index),
                "must not be negative",
            ));
        }
    }

    let ancillary = [
        ("vocEscalations", input.voc_escalations),
        ("dispatchResponses", input.dispatch_responses),
        ("gdodsPatrols", input.gdods_patrols),
        ("sgppPatrols", input.sgpp_patrols),
        ("forensicInvestigations", input.forensic_investigations),
        ("appUsers", input.app_users),
        ("audioDevices", input.audio_devices),
    ];
    for (field, count) in ancillary {
        if count < 0 {
            errors.push(FieldError::new(field, "must not be negative"));
        }
    }

    match customer_type {
        Some(value) if errors.is_empty() => Ok(value),
        _ => Err(ValidationError { errors }),
    }
}
