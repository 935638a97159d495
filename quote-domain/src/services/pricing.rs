// KVG pricing engine
// Pure fee calculation over a validated pricing input: tiered event fees,
// patrol labor accrual, flat ancillary charges, and the customer-type
// minimum-fee floor.

use crate::entities::{PricingInput, PricingResult};
use crate::services::validation::{validate_pricing_input, FieldError, ValidationError};
use crate::value_objects::CustomerType;

/// Monthly event volume tiers as (inclusive upper bound, flat fee).
/// There is no overflow tier: volumes past the last bound bill at the top
/// price. Known gap for large sites, kept until product decides otherwise.
const EVENT_FEE_TIERS: [(i64, f64); 11] = [
    (500, 625.0),
    (750, 935.0),
    (1000, 1250.0),
    (1250, 1560.0),
    (1500, 1875.0),
    (1750, 2190.0),
    (2000, 2400.0),
    (2250, 2700.0),
    (2500, 3000.0),
    (2750, 3300.0),
    (3000, 3600.0),
];

const WEEKS_PER_MONTH: f64 = 4.33;
const MINUTES_PER_PATROL: f64 = 5.0;
const PATROL_HOURLY_RATE: f64 = 85.0;

const VOC_ESCALATION_PRICE: f64 = 10.0;
const DISPATCH_RESPONSE_PRICE: f64 = 0.0;
const GDODS_PATROL_PRICE: f64 = 425.0;
const SGPP_PATROL_PRICE: f64 = 60.0;
const FORENSIC_INVESTIGATION_PRICE: f64 = 60.0;
const APP_USER_PRICE: f64 = 5.0;
const AUDIO_DEVICE_PRICE: f64 = 0.0;

/// Fee for existing customers below which management sign-off is required.
const EXISTING_APPROVAL_THRESHOLD: f64 = 200.0;

/// Flat monthly fee for a total event volume.
pub fn event_fee(total_events: i64) -> f64 {
    if total_events <= 0 {
        return 0.0;
    }
    for (bound, fee) in EVENT_FEE_TIERS {
        if total_events <= bound {
            return fee;
        }
    }
    EVENT_FEE_TIERS[EVENT_FEE_TIERS.len() - 1].1
}

/// Human-readable label for the tier a total event volume falls into.
pub fn event_tier_label(total_events: i64) -> String {
    if total_events <= 0 {
        return "N/A".to_string();
    }
    for (index, (bound, _)) in EVENT_FEE_TIERS.iter().enumerate() {
        if total_events <= *bound {
            return format!("Tier {} (≤ {})", index + 1, bound);
        }
    }
    let (last_bound, _) = EVENT_FEE_TIERS[EVENT_FEE_TIERS.len() - 1];
    format!("Tier {} (≤ {})", EVENT_FEE_TIERS.len(), last_bound)
}

fn count_overflow(index: usize, field: &str) -> ValidationError {
    ValidationError {
        errors: vec![FieldError::new(
            format!("streams[{}].{}", index, field),
            "too large to price",
        )],
    }
}

/// Computes the full fee breakdown for a pricing input.
///
/// Validates first, then runs the arithmetic. Sign checks live in the
/// validator; magnitudes are unchecked there, so the event and camera
/// accumulators guard against overflow and report it as a field error.
pub fn compute_pricing(input: &PricingInput) -> Result<PricingResult, ValidationError> {
    let customer_type = validate_pricing_input(input)?;

    let mut total_cameras: i64 = 0;
    let mut total_events: i64 = 0;
    let mut patrols_per_month: f64 = 0.0;
    let mut patrol_hours: f64 = 0.0;

    for (index, stream) in input.streams.iter().enumerate() {
        total_cameras = total_cameras
            .checked_add(stream.quantity)
            .ok_or_else(|| count_overflow(index, "quantity"))?;
        total_events = stream
            .event_volume
            .checked_mul(stream.quantity)
            .and_then(|events| total_events.checked_add(events))
            .ok_or_else(|| count_overflow(index, "eventVolume"))?;
        if stream.patrols_per_week > 0 {
            let stream_patrols =
                stream.patrols_per_week as f64 * WEEKS_PER_MONTH * stream.quantity as f64;
            patrols_per_month += stream_patrols;
            patrol_hours += stream_patrols * (MINUTES_PER_PATROL / 60.0);
        }
    }

    let event_fee = event_fee(total_events);
    let patrol_fee = patrol_hours * PATROL_HOURLY_RATE;

    let additional_fees = input.voc_escalations as f64 * VOC_ESCALATION_PRICE
        + input.dispatch_responses as f64 * DISPATCH_RESPONSE_PRICE
        + input.gdods_patrols as f64 * GDODS_PATROL_PRICE
        + input.sgpp_patrols as f64 * SGPP_PATROL_PRICE
        + input.forensic_investigations as f64 * FORENSIC_INVESTIGATION_PRICE
        + input.app_users as f64 * APP_USER_PRICE
        + input.audio_devices as f64 * AUDIO_DEVICE_PRICE;

    let raw_total = event_fee + patrol_fee + additional_fees;
    let minimum_fee = customer_type.minimum_fee();
    let minimum_fee_applied = raw_total < minimum_fee;
    let total_fee = raw_total.max(minimum_fee);

    // Unreachable once the floor has lifted the total to at least 200,
    // but the flag is part of the result contract.
    let approval_needed =
        customer_type == CustomerType::Existing && total_fee < EXISTING_APPROVAL_THRESHOLD;

    Ok(PricingResult {
        total_cameras,
        total_events,
        event_tier: event_tier_label(total_events),
        event_fee,
        patrols_per_month: patrols_per_month.round() as i64,
        patrol_hours,
        patrol_fee,
        additional_fees,
        total_fee,
        minimum_fee_applied,
        approval_needed,
    })
}
