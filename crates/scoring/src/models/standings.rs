use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SailNumber;

/// How a corrected finishing position converts to race points.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointsPolicy {
    /// Low-point system: 1st = 1 point, 2nd = 2, and so on.
    #[default]
    PositionIsPoints,
    /// Explicit table indexed by position − 1; positions past the end of the
    /// table fall back to position-as-points.
    Table { points: Vec<f64> },
}

impl PointsPolicy {
    pub fn points_for_position(&self, position: u32) -> f64 {
        match self {
            Self::PositionIsPoints => f64::from(position),
            Self::Table { points } => points
                .get(position as usize - 1)
                .copied()
                .unwrap_or_else(|| f64::from(position)),
        }
    }
}

/// "Discard the worst `worst_n` results once `after_races` races are completed."
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DiscardPolicy {
    pub worst_n: u32,
    pub after_races: u32,
}

/// Scoring configuration for a series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoringPolicy {
    #[serde(default)]
    pub points: PointsPolicy,
    /// Non-finishers score fleet size + this offset (regatta convention: 1).
    #[serde(default = "default_penalty_offset")]
    pub non_finisher_penalty_offset: u32,
    pub discard: Option<DiscardPolicy>,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            points: PointsPolicy::default(),
            non_finisher_penalty_offset: default_penalty_offset(),
            discard: None,
        }
    }
}

fn default_penalty_offset() -> u32 {
    1
}

/// One boat's line in the series standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StandingEntry {
    pub entry_id: Uuid,
    pub sail_number: SailNumber,
    pub boat_name: Option<String>,
    pub total_points: f64,
    /// Total after the boat's own worst results are discarded.
    pub net_points: f64,
    pub wins: u32,
    pub races_sailed: u32,
    /// 1-based fleet rank; boats equal on every tie-break key share a rank.
    pub rank: u32,
}
