use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SailNumber;

/// A boat's rating under one system.
///
/// At most one active rating exists per (system, sail number); deactivation is
/// a soft delete so corrected times computed for past races stay reproducible.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoatRating {
    pub rating_id: Uuid,
    pub system_code: String,
    pub sail_number: SailNumber,
    pub boat_name: Option<String>,
    /// Meaning depends on the system: a TCF-like multiplier for time-on-time,
    /// an allowance in seconds per nautical mile for time-on-distance.
    pub rating_value: Decimal,
    /// Precomputed TCF, used in preference to deriving one from `rating_value`.
    pub time_correction_factor: Option<Decimal>,
    pub active: bool,
    pub updated_at: chrono::NaiveDateTime,
}
