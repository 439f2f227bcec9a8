use scoring::Store;
use scoring::error::Result;
use scoring::models::{ScoringPolicy, StandingEntry};
use scoring::services::race_scoring;
use uuid::Uuid;

/// Series standings for a regatta under one rating system
pub fn get_standings(
    store: &Store,
    regatta_id: Uuid,
    system_code: &str,
    course_distance_nm: Option<f64>,
    policy: &ScoringPolicy,
) -> Result<Vec<StandingEntry>> {
    race_scoring::regatta_standings(store, regatta_id, system_code, course_distance_nm, policy)
}
