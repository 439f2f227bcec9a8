use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::catalog::SystemCatalog;
use crate::display::{format_corrected, format_delta, format_time};
use crate::models::{CorrectedResult, RaceScorecard, ScoringWarning};
use crate::repository::RaceEntry;

/// One raw finishing record in a results upload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RaceEntryRequest {
    #[validate(length(min = 1, max = 32))]
    pub sail_number: String,
    /// Omit for DNF/DNS; the entry still counts toward the fleet.
    pub elapsed_seconds: Option<f64>,
    pub finish_timestamp: Option<chrono::NaiveDateTime>,
}

/// Request payload for recording one race's results (replaces any previous
/// entry list for that race).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordResultsRequest {
    #[validate(length(min = 1, message = "At least one race entry is required"))]
    #[validate(nested)]
    pub entries: Vec<RaceEntryRequest>,
}

impl RecordResultsRequest {
    pub fn into_entries(self) -> Vec<RaceEntry> {
        self.entries
            .into_iter()
            .map(|e| RaceEntry {
                sail_number: e.sail_number,
                elapsed_seconds: e.elapsed_seconds,
                finish_timestamp: e.finish_timestamp,
            })
            .collect()
    }
}

/// Query parameters selecting the rating system for a scoring request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ScoringQuery {
    /// Rating system code, e.g. "PHRF" or "IRC".
    pub system: String,
    /// Course distance in nautical miles; required for time-on-distance systems.
    pub distance_nm: Option<f64>,
}

impl ScoringQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.system.trim().is_empty() {
            return Err("system must not be empty".to_string());
        }
        if let Some(distance) = self.distance_nm
            && !(distance.is_finite() && distance > 0.0)
        {
            return Err("distance_nm must be a positive number".to_string());
        }
        Ok(())
    }
}

/// One corrected result with display-ready formatting.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CorrectedResultResponse {
    pub result_id: Uuid,
    pub sail_number: String,
    pub boat_name: Option<String>,
    pub rating_value: rust_decimal::Decimal,
    pub elapsed_seconds: Option<f64>,
    pub corrected_seconds: Option<f64>,
    pub corrected_position: Option<u32>,
    pub time_behind_leader_seconds: Option<f64>,
    /// "MM:SS" / "H:MM:SS"; "DNF" for non-finishers.
    pub elapsed_display: String,
    pub corrected_display: String,
    /// "+MM:SS" behind the leader; empty for the leader and non-finishers.
    pub delta_display: String,
}

impl CorrectedResultResponse {
    fn new(result: CorrectedResult, precision: u32) -> Self {
        let elapsed_display = result
            .elapsed_seconds
            .map(format_time)
            .unwrap_or_else(|| "DNF".to_string());
        let corrected_display = result
            .corrected_seconds
            .map(|s| format_corrected(s, precision))
            .unwrap_or_else(|| "DNF".to_string());
        let delta_display = match result.time_behind_leader_seconds {
            Some(delta) if delta > 0.0 => format_delta(delta),
            _ => String::new(),
        };
        Self {
            result_id: result.result_id,
            sail_number: result.sail_number.to_string(),
            boat_name: result.boat_name,
            rating_value: result.rating_value,
            elapsed_seconds: result.elapsed_seconds,
            corrected_seconds: result.corrected_seconds,
            corrected_position: result.corrected_position,
            time_behind_leader_seconds: result.time_behind_leader_seconds,
            elapsed_display,
            corrected_display,
            delta_display,
        }
    }
}

/// Response containing one race's corrected and ranked results.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScorecardResponse {
    pub regatta_id: Uuid,
    pub race_number: u32,
    pub system_code: String,
    pub results: Vec<CorrectedResultResponse>,
    pub warnings: Vec<ScoringWarning>,
}

impl From<RaceScorecard> for ScorecardResponse {
    fn from(card: RaceScorecard) -> Self {
        let precision = SystemCatalog::get(&card.system_code)
            .map(|s| s.rating_precision)
            .unwrap_or(0);
        Self {
            regatta_id: card.regatta_id,
            race_number: card.race_number,
            system_code: card.system_code,
            results: card
                .results
                .into_iter()
                .map(|r| CorrectedResultResponse::new(r, precision))
                .collect(),
            warnings: card.warnings,
        }
    }
}
