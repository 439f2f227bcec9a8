use crate::models::CorrectedResult;

/// Corrected times compare equal when they round to the same millisecond.
fn millis(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

/// Ranks one race's corrected results.
///
/// Finishers sort ascending by corrected time; ties break by earlier raw
/// elapsed time, then by stable input order. Boats still tied after both
/// tiebreaks share a position and the next distinct boat skips past them
/// (1, 1, 3 — standard regatta convention). Non-finishers keep a `None`
/// position and are appended after the finishers.
pub fn rank_race(results: Vec<CorrectedResult>) -> Vec<CorrectedResult> {
    let (mut finishers, mut non_finishers): (Vec<_>, Vec<_>) = results
        .into_iter()
        .partition(|r| r.corrected_seconds.is_some());

    let sort_key = |r: &CorrectedResult| {
        (
            r.corrected_seconds.map(millis).unwrap_or(i64::MAX),
            r.elapsed_seconds.map(millis).unwrap_or(i64::MAX),
        )
    };
    // Stable sort keeps input order for boats equal on both keys.
    finishers.sort_by_key(sort_key);

    let leader_corrected = finishers
        .first()
        .and_then(|leader| leader.corrected_seconds);

    let mut index = 0;
    while index < finishers.len() {
        let key = sort_key(&finishers[index]);
        let tied = finishers[index..]
            .iter()
            .take_while(|r| sort_key(*r) == key)
            .count();
        let position = (index + 1) as u32;
        for result in &mut finishers[index..index + tied] {
            result.corrected_position = Some(position);
            if let (Some(own), Some(leader)) = (result.corrected_seconds, leader_corrected) {
                result.time_behind_leader_seconds = Some(own - leader);
            }
        }
        index += tied;
    }

    for result in &mut non_finishers {
        result.corrected_position = None;
        result.time_behind_leader_seconds = None;
    }

    finishers.append(&mut non_finishers);
    finishers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SailNumber;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn result(sail: &str, elapsed: Option<f64>, corrected: Option<f64>) -> CorrectedResult {
        CorrectedResult {
            result_id: Uuid::new_v4(),
            sail_number: SailNumber::new(sail),
            boat_name: None,
            rating_value: Decimal::from(60),
            elapsed_seconds: elapsed,
            corrected_seconds: corrected,
            corrected_position: None,
            time_behind_leader_seconds: None,
        }
    }

    fn position_of(ranked: &[CorrectedResult], sail: &str) -> Option<u32> {
        ranked
            .iter()
            .find(|r| r.sail_number == SailNumber::new(sail))
            .and_then(|r| r.corrected_position)
    }

    #[test]
    fn test_orders_by_corrected_time() {
        let ranked = rank_race(vec![
            result("USA 1", Some(3700.0), Some(3650.0)),
            result("USA 2", Some(3600.0), Some(3500.0)),
            result("USA 3", Some(3800.0), Some(3900.0)),
        ]);
        assert_eq!(position_of(&ranked, "USA 2"), Some(1));
        assert_eq!(position_of(&ranked, "USA 1"), Some(2));
        assert_eq!(position_of(&ranked, "USA 3"), Some(3));
    }

    #[test]
    fn test_equal_corrected_breaks_by_lower_elapsed() {
        let ranked = rank_race(vec![
            result("SLOW", Some(3010.0), Some(3000.0)),
            result("FAST", Some(2990.0), Some(3000.0)),
        ]);
        assert_eq!(position_of(&ranked, "FAST"), Some(1));
        assert_eq!(position_of(&ranked, "SLOW"), Some(2));
    }

    #[test]
    fn test_full_ties_share_a_position_without_gaps_before() {
        let ranked = rank_race(vec![
            result("A", Some(3000.0), Some(2900.0)),
            result("B", Some(3000.0), Some(2900.0)),
            result("C", Some(3100.0), Some(2950.0)),
        ]);
        assert_eq!(position_of(&ranked, "A"), Some(1));
        assert_eq!(position_of(&ranked, "B"), Some(1));
        // Two boats tied for first; next distinct boat is third.
        assert_eq!(position_of(&ranked, "C"), Some(3));
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let ranked = rank_race(vec![
            result("FIRST-IN", Some(3000.0), Some(2900.0)),
            result("SECOND-IN", Some(3000.0), Some(2900.0)),
        ]);
        assert_eq!(ranked[0].sail_number, SailNumber::new("FIRST-IN"));
        assert_eq!(ranked[1].sail_number, SailNumber::new("SECOND-IN"));
    }

    #[test]
    fn test_time_behind_leader() {
        let ranked = rank_race(vec![
            result("USA 1", Some(3650.0), Some(3620.5)),
            result("USA 2", Some(3600.0), Some(3500.0)),
        ]);
        let leader = &ranked[0];
        let runner_up = &ranked[1];
        assert_eq!(leader.time_behind_leader_seconds, Some(0.0));
        assert!((runner_up.time_behind_leader_seconds.unwrap() - 120.5).abs() < 1e-9);
    }

    #[test]
    fn test_non_finishers_excluded_and_appended() {
        let ranked = rank_race(vec![
            result("DNF", None, None),
            result("USA 1", Some(3600.0), Some(3500.0)),
        ]);
        assert_eq!(ranked[0].sail_number, SailNumber::new("USA 1"));
        let dnf = &ranked[1];
        assert_eq!(dnf.corrected_position, None);
        assert_eq!(dnf.time_behind_leader_seconds, None);
    }

    #[test]
    fn test_position_assignment_is_permutation_stable() {
        let inputs = [
            ("USA 1", 3700.0, 3650.0),
            ("USA 2", 3600.0, 3500.0),
            ("USA 3", 3800.0, 3650.0),
            ("USA 4", 3900.0, 3990.0),
        ];

        let orderings: Vec<Vec<usize>> = vec![
            vec![0, 1, 2, 3],
            vec![3, 2, 1, 0],
            vec![1, 3, 0, 2],
            vec![2, 0, 3, 1],
        ];

        let mut expected: Option<Vec<(String, Option<u32>)>> = None;
        for ordering in orderings {
            let ranked = rank_race(
                ordering
                    .iter()
                    .map(|&i| {
                        let (sail, elapsed, corrected) = inputs[i];
                        result(sail, Some(elapsed), Some(corrected))
                    })
                    .collect(),
            );
            let mut positions: Vec<(String, Option<u32>)> = ranked
                .iter()
                .map(|r| (r.sail_number.to_string(), r.corrected_position))
                .collect();
            positions.sort();
            match &expected {
                None => expected = Some(positions),
                Some(e) => assert_eq!(&positions, e),
            }
        }
    }

    #[test]
    fn test_sub_millisecond_difference_is_a_tie() {
        let ranked = rank_race(vec![
            result("A", Some(2990.0), Some(3000.0000001)),
            result("B", Some(3010.0), Some(3000.0)),
        ]);
        // Equal to the comparison precision, so the earlier elapsed time wins.
        assert_eq!(position_of(&ranked, "A"), Some(1));
        assert_eq!(position_of(&ranked, "B"), Some(2));
    }
}
