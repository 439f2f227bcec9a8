use uuid::Uuid;

use crate::catalog::SystemCatalog;
use crate::error::{Result, ScoringError};
use crate::models::{
    CalculationType, CorrectedResult, RaceScorecard, ScoringPolicy, ScoringWarning, StandingEntry,
};
use crate::repository::{RaceRepository, RatingRepository};
use crate::store::Store;

use super::corrected_time::corrected_seconds;
use super::ranking::rank_race;
use super::standings::compute_standings;

/// Scores one race: matches entries to active ratings, corrects elapsed
/// times, and ranks the fleet.
///
/// Per-boat problems (no matching rating, unusable TCF) become warnings and
/// exclude only that boat; a missing course distance on a time-on-distance
/// system is a race-wide configuration error and fails the whole call.
/// Results are recomputed from the current store on every call — nothing is
/// cached, so rating edits are always reflected.
pub fn score_race(
    store: &Store,
    regatta_id: Uuid,
    race_number: u32,
    system_code: &str,
    course_distance_nm: Option<f64>,
) -> Result<RaceScorecard> {
    let system = SystemCatalog::get(system_code)?;
    if system.calculation_type == CalculationType::TimeOnDistance && course_distance_nm.is_none() {
        return Err(ScoringError::MissingCourseDistance);
    }

    let raw_results = RaceRepository::new(store).find_race(regatta_id, race_number)?;
    let ratings = RatingRepository::new(store);

    let mut corrected = Vec::with_capacity(raw_results.len());
    let mut warnings = Vec::new();

    for raw in raw_results {
        let rating = match ratings.find(&system.code, &raw.sail_number) {
            Ok(rating) => rating,
            Err(ScoringError::NotFound) => {
                warnings.push(ScoringWarning::SailNumberMismatch {
                    sail_number: raw.sail_number,
                });
                continue;
            }
            Err(other) => return Err(other),
        };

        let correction =
            match corrected_seconds(raw.elapsed_seconds, &rating, system, course_distance_nm) {
                Ok(correction) => correction,
                Err(error) => {
                    warnings.push(ScoringWarning::RatingUnusable {
                        sail_number: raw.sail_number,
                        reason: error.to_string(),
                    });
                    continue;
                }
            };
        if correction.clamped {
            warnings.push(ScoringWarning::NegativeCorrectedClamped {
                sail_number: raw.sail_number.clone(),
            });
        }

        corrected.push(CorrectedResult {
            result_id: raw.result_id,
            sail_number: raw.sail_number,
            boat_name: rating.boat_name.clone(),
            rating_value: rating.rating_value,
            elapsed_seconds: raw.elapsed_seconds,
            corrected_seconds: correction.corrected_seconds,
            corrected_position: None,
            time_behind_leader_seconds: None,
        });
    }

    Ok(RaceScorecard {
        regatta_id,
        race_number,
        system_code: system.code.clone(),
        results: rank_race(corrected),
        warnings,
    })
}

/// Scores every recorded race of a regatta, in race-number order.
pub fn score_regatta(
    store: &Store,
    regatta_id: Uuid,
    system_code: &str,
    course_distance_nm: Option<f64>,
) -> Result<Vec<RaceScorecard>> {
    let race_numbers: Vec<u32> = RaceRepository::new(store)
        .list_regatta_races(regatta_id)
        .into_iter()
        .map(|(number, _)| number)
        .collect();
    if race_numbers.is_empty() {
        return Err(ScoringError::NotFound);
    }

    race_numbers
        .into_iter()
        .map(|number| score_race(store, regatta_id, number, system_code, course_distance_nm))
        .collect()
}

/// Series standings for a regatta under one system.
pub fn regatta_standings(
    store: &Store,
    regatta_id: Uuid,
    system_code: &str,
    course_distance_nm: Option<f64>,
    policy: &ScoringPolicy,
) -> Result<Vec<StandingEntry>> {
    let races = score_regatta(store, regatta_id, system_code, course_distance_nm)?;
    Ok(compute_standings(&races, policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SailNumber;
    use crate::repository::RaceEntry;
    use rust_decimal::Decimal;

    fn entry(sail: &str, elapsed: Option<f64>) -> RaceEntry {
        RaceEntry {
            sail_number: sail.to_string(),
            elapsed_seconds: elapsed,
            finish_timestamp: None,
        }
    }

    fn phrf_fixture() -> (Store, Uuid) {
        let store = Store::new();
        let regatta = Uuid::new_v4();
        let ratings = RatingRepository::new(&store);
        ratings
            .upsert("PHRF", "USA 1", Decimal::from(60), None, Some("Kestrel".into()))
            .unwrap();
        ratings
            .upsert("PHRF", "USA 2", Decimal::from(120), None, Some("Osprey".into()))
            .unwrap();
        RaceRepository::new(&store)
            .record_results(
                regatta,
                1,
                vec![entry("USA 1", Some(7200.0)), entry("USA 2", Some(7500.0))],
            )
            .unwrap();
        (store, regatta)
    }

    #[test]
    fn test_scores_and_ranks_a_race() {
        let (store, regatta) = phrf_fixture();
        let card = score_race(&store, regatta, 1, "PHRF", Some(10.0)).unwrap();

        assert!(card.warnings.is_empty());
        // USA 1: 7200 − 600 = 6600; USA 2: 7500 − 1200 = 6300 and leads.
        let leader = &card.results[0];
        assert_eq!(leader.sail_number, SailNumber::new("USA 2"));
        assert_eq!(leader.corrected_seconds, Some(6300.0));
        assert_eq!(leader.corrected_position, Some(1));
        assert_eq!(card.results[1].corrected_position, Some(2));
        assert_eq!(card.results[1].time_behind_leader_seconds, Some(300.0));
    }

    #[test]
    fn test_unmatched_sail_number_is_a_warning_not_a_failure() {
        let (store, regatta) = phrf_fixture();
        RaceRepository::new(&store)
            .record_results(
                regatta,
                1,
                vec![
                    entry("USA 1", Some(7200.0)),
                    entry("NOPE 99", Some(7000.0)),
                ],
            )
            .unwrap();

        let card = score_race(&store, regatta, 1, "PHRF", Some(10.0)).unwrap();
        assert_eq!(card.results.len(), 1);
        assert_eq!(
            card.warnings,
            vec![ScoringWarning::SailNumberMismatch {
                sail_number: SailNumber::new("NOPE 99")
            }]
        );
    }

    #[test]
    fn test_missing_distance_fails_the_whole_race() {
        let (store, regatta) = phrf_fixture();
        assert_eq!(
            score_race(&store, regatta, 1, "PHRF", None).unwrap_err(),
            ScoringError::MissingCourseDistance
        );
    }

    #[test]
    fn test_unusable_rating_excludes_only_that_boat() {
        let store = Store::new();
        let regatta = Uuid::new_v4();
        let ratings = RatingRepository::new(&store);
        // ORC requires a stored TCF; only USA 2 has one.
        ratings
            .upsert("ORC", "USA 1", Decimal::from(600), None, None)
            .unwrap();
        ratings
            .upsert("ORC", "USA 2", Decimal::from(600), Some(Decimal::new(105, 2)), None)
            .unwrap();
        RaceRepository::new(&store)
            .record_results(
                regatta,
                1,
                vec![entry("USA 1", Some(3600.0)), entry("USA 2", Some(3600.0))],
            )
            .unwrap();

        let card = score_race(&store, regatta, 1, "ORC", None).unwrap();
        assert_eq!(card.results.len(), 1);
        assert_eq!(card.results[0].sail_number, SailNumber::new("USA 2"));
        assert!(matches!(
            card.warnings[0],
            ScoringWarning::RatingUnusable { .. }
        ));
    }

    #[test]
    fn test_clamped_correction_warns_but_still_scores() {
        let store = Store::new();
        let regatta = Uuid::new_v4();
        RatingRepository::new(&store)
            .upsert("PHRF", "USA 1", Decimal::from(600), None, None)
            .unwrap();
        RaceRepository::new(&store)
            .record_results(regatta, 1, vec![entry("USA 1", Some(100.0))])
            .unwrap();

        let card = score_race(&store, regatta, 1, "PHRF", Some(10.0)).unwrap();
        assert_eq!(card.results[0].corrected_seconds, Some(0.0));
        assert_eq!(
            card.warnings,
            vec![ScoringWarning::NegativeCorrectedClamped {
                sail_number: SailNumber::new("USA 1")
            }]
        );
    }

    #[test]
    fn test_rating_change_is_reflected_on_recompute() {
        let (store, regatta) = phrf_fixture();
        let before = score_race(&store, regatta, 1, "PHRF", Some(10.0)).unwrap();
        let used_before = before.results[1].rating_value;

        RatingRepository::new(&store)
            .upsert("PHRF", "USA 1", Decimal::from(90), None, None)
            .unwrap();
        let after = score_race(&store, regatta, 1, "PHRF", Some(10.0)).unwrap();

        let boat = |card: &RaceScorecard| {
            card.results
                .iter()
                .find(|r| r.sail_number == SailNumber::new("USA 1"))
                .cloned()
                .unwrap()
        };
        assert_eq!(used_before, Decimal::from(60));
        assert_eq!(boat(&after).rating_value, Decimal::from(90));
        assert_eq!(boat(&after).corrected_seconds, Some(7200.0 - 900.0));
        // The scorecard held by the caller keeps its snapshot.
        assert_eq!(boat(&before).corrected_seconds, Some(6600.0));
    }

    #[test]
    fn test_regatta_standings_end_to_end() {
        let (store, regatta) = phrf_fixture();
        RaceRepository::new(&store)
            .record_results(
                regatta,
                2,
                vec![entry("USA 1", Some(7000.0)), entry("USA 2", None)],
            )
            .unwrap();

        let standings =
            regatta_standings(&store, regatta, "PHRF", Some(10.0), &ScoringPolicy::default())
                .unwrap();

        // Race 1: USA 2 wins. Race 2: USA 1 wins, USA 2 DNF scores 3 (fleet 2 + 1).
        let top = &standings[0];
        assert_eq!(top.sail_number, SailNumber::new("USA 1"));
        assert_eq!(top.net_points, 3.0);
        assert_eq!(top.rank, 1);
        let other = &standings[1];
        assert_eq!(other.total_points, 4.0);
        assert_eq!(other.races_sailed, 2);
        assert_eq!(other.wins, 1);
    }

    #[test]
    fn test_unknown_regatta_is_not_found() {
        let store = Store::new();
        assert_eq!(
            score_regatta(&store, Uuid::new_v4(), "PHRF", Some(10.0)).unwrap_err(),
            ScoringError::NotFound
        );
    }
}
