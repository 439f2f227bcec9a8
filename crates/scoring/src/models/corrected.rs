use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SailNumber;

/// One boat's corrected outcome in one race.
///
/// Derived data, recomputed on demand from the raw result and the current
/// active rating; the rating value used is snapshotted here so a later rating
/// change is visible in any scorecard a caller kept.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CorrectedResult {
    pub result_id: Uuid,
    pub sail_number: SailNumber,
    pub boat_name: Option<String>,
    /// Rating value in effect when this result was scored.
    pub rating_value: Decimal,
    /// Raw elapsed seconds; carried for the tie-break on equal corrected time.
    pub elapsed_seconds: Option<f64>,
    /// Unrounded corrected seconds; `None` for non-finishers.
    pub corrected_seconds: Option<f64>,
    /// 1-based rank among finishers; `None` for non-finishers.
    pub corrected_position: Option<u32>,
    /// Own corrected time minus the leader's, 0 for the leader.
    pub time_behind_leader_seconds: Option<f64>,
}

/// A recoverable condition noticed while scoring a race.
///
/// Warnings never abort scoring: a boat that cannot be scored is excluded
/// visibly instead of failing the rest of the fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoringWarning {
    /// A race entry's sail number has no matching active rating in the system.
    SailNumberMismatch { sail_number: SailNumber },
    /// A time-on-distance correction went below zero and was clamped to 0.
    NegativeCorrectedClamped { sail_number: SailNumber },
    /// The boat's rating could not produce a corrected time
    /// (missing TCF or similar configuration gap).
    RatingUnusable {
        sail_number: SailNumber,
        reason: String,
    },
}

/// The corrected and ranked outcome of a single race.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceScorecard {
    pub regatta_id: Uuid,
    pub race_number: u32,
    pub system_code: String,
    pub results: Vec<CorrectedResult>,
    pub warnings: Vec<ScoringWarning>,
}

impl RaceScorecard {
    /// Boats with any recorded, scoreable result in this race.
    pub fn fleet_size(&self) -> usize {
        self.results.len()
    }
}
