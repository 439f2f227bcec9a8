use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::models::{RaceResult, SailNumber};
use crate::store::Store;

/// A raw race entry as supplied by the caller; ids and normalization are
/// applied on record.
#[derive(Debug, Clone)]
pub struct RaceEntry {
    pub sail_number: String,
    pub elapsed_seconds: Option<f64>,
    pub finish_timestamp: Option<chrono::NaiveDateTime>,
}

pub struct RaceRepository<'a> {
    store: &'a Store,
}

impl<'a> RaceRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Records the full entry list for one race, replacing any previous list.
    ///
    /// Corrected results are derived on demand, so re-recording a race needs
    /// no cache invalidation.
    pub fn record_results(
        &self,
        regatta_id: Uuid,
        race_number: u32,
        entries: Vec<RaceEntry>,
    ) -> Result<Vec<RaceResult>> {
        let mut results = Vec::with_capacity(entries.len());
        for entry in entries {
            let sail_number = SailNumber::new(&entry.sail_number);
            if sail_number.is_empty() {
                return Err(ScoringError::InvalidEntry(
                    "race entry sail number must not be empty".to_string(),
                ));
            }
            if let Some(elapsed) = entry.elapsed_seconds
                && !(elapsed.is_finite() && elapsed > 0.0)
            {
                return Err(ScoringError::InvalidEntry(format!(
                    "elapsed time {elapsed} for {sail_number} must be a positive number"
                )));
            }
            results.push(RaceResult {
                result_id: Uuid::new_v4(),
                regatta_id,
                race_number,
                sail_number,
                elapsed_seconds: entry.elapsed_seconds,
                finish_timestamp: entry.finish_timestamp,
            });
        }

        self.store
            .races_mut()
            .insert((regatta_id, race_number), results.clone());
        Ok(results)
    }

    pub fn find_race(&self, regatta_id: Uuid, race_number: u32) -> Result<Vec<RaceResult>> {
        self.store
            .races()
            .get(&(regatta_id, race_number))
            .cloned()
            .ok_or(ScoringError::NotFound)
    }

    /// All recorded races of a regatta, ordered by race number.
    pub fn list_regatta_races(&self, regatta_id: Uuid) -> Vec<(u32, Vec<RaceResult>)> {
        let races = self.store.races();
        let mut result: Vec<(u32, Vec<RaceResult>)> = races
            .iter()
            .filter(|((rid, _), _)| *rid == regatta_id)
            .map(|((_, number), results)| (*number, results.clone()))
            .collect();
        result.sort_by_key(|(number, _)| *number);
        result
    }
}
