use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::SailNumber;

/// A raw finishing record for one boat in one race.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RaceResult {
    pub result_id: Uuid,
    pub regatta_id: Uuid,
    pub race_number: u32,
    pub sail_number: SailNumber,
    /// `None` marks a non-finisher (DNF/DNS); the entry still counts toward
    /// races sailed and fleet size.
    pub elapsed_seconds: Option<f64>,
    pub finish_timestamp: Option<chrono::NaiveDateTime>,
}

impl RaceResult {
    pub fn finished(&self) -> bool {
        self.elapsed_seconds.is_some()
    }
}
