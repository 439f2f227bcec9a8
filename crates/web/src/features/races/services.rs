use scoring::Store;
use scoring::error::Result;
use scoring::models::{RaceResult, RaceScorecard};
use scoring::repository::{RaceEntry, RaceRepository};
use scoring::services::race_scoring;
use uuid::Uuid;

/// Record the full entry list for one race, replacing any previous list
pub fn record_results(
    store: &Store,
    regatta_id: Uuid,
    race_number: u32,
    entries: Vec<RaceEntry>,
) -> Result<Vec<RaceResult>> {
    let repo = RaceRepository::new(store);
    repo.record_results(regatta_id, race_number, entries)
}

/// Corrected and ranked results for one race
pub fn calculate_race_results(
    store: &Store,
    regatta_id: Uuid,
    race_number: u32,
    system_code: &str,
    course_distance_nm: Option<f64>,
) -> Result<RaceScorecard> {
    race_scoring::score_race(store, regatta_id, race_number, system_code, course_distance_nm)
}

/// Corrected and ranked results for every race of a regatta
pub fn calculate_regatta_results(
    store: &Store,
    regatta_id: Uuid,
    system_code: &str,
    course_distance_nm: Option<f64>,
) -> Result<Vec<RaceScorecard>> {
    race_scoring::score_regatta(store, regatta_id, system_code, course_distance_nm)
}
