use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{DiscardPolicy, ScoringPolicy, StandingEntry};

/// Query parameters for a series-standings request.
#[derive(Debug, Deserialize, IntoParams)]
pub struct StandingsQuery {
    pub system: String,
    pub distance_nm: Option<f64>,
    /// Discard the worst N results per boat.
    pub discard_worst: Option<u32>,
    /// Apply discards only once this many races are completed.
    pub discard_after: Option<u32>,
}

impl StandingsQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.system.trim().is_empty() {
            return Err("system must not be empty".to_string());
        }
        if let Some(distance) = self.distance_nm
            && !(distance.is_finite() && distance > 0.0)
        {
            return Err("distance_nm must be a positive number".to_string());
        }
        if self.discard_worst.is_some() != self.discard_after.is_some() {
            return Err("discard_worst and discard_after must be supplied together".to_string());
        }
        Ok(())
    }

    pub fn scoring_policy(&self) -> ScoringPolicy {
        ScoringPolicy {
            discard: self.discard_worst.zip(self.discard_after).map(
                |(worst_n, after_races)| DiscardPolicy {
                    worst_n,
                    after_races,
                },
            ),
            ..ScoringPolicy::default()
        }
    }
}

/// One boat's standings line.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandingEntryResponse {
    pub entry_id: Uuid,
    pub rank: u32,
    pub sail_number: String,
    pub boat_name: Option<String>,
    pub total_points: f64,
    pub net_points: f64,
    pub wins: u32,
    pub races_sailed: u32,
}

impl From<StandingEntry> for StandingEntryResponse {
    fn from(entry: StandingEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            rank: entry.rank,
            sail_number: entry.sail_number.to_string(),
            boat_name: entry.boat_name,
            total_points: entry.total_points,
            net_points: entry.net_points,
            wins: entry.wins,
            races_sailed: entry.races_sailed,
        }
    }
}

/// Response containing a regatta's standings table.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StandingsResponse {
    pub regatta_id: Uuid,
    pub system_code: String,
    pub entries: Vec<StandingEntryResponse>,
}
