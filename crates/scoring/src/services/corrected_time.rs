use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{Result, ScoringError};
use crate::models::{BoatRating, CalculationType, RatingSystem, TcfFormula};

/// Outcome of correcting one elapsed time.
///
/// `clamped` is set when a time-on-distance allowance pushed the corrected
/// time below zero and it was held at 0; callers surface that as a warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    pub corrected_seconds: Option<f64>,
    pub clamped: bool,
}

/// Corrects a single elapsed time under the given system.
///
/// Pure: no clock, no randomness, no hidden state. A `None` elapsed time
/// (DNF/DNS) yields a `None` corrected time, never an error. Corrected values
/// stay unrounded; only display rounds to the system's precision, so rounding
/// error cannot compound across series aggregation.
pub fn corrected_seconds(
    elapsed_seconds: Option<f64>,
    rating: &BoatRating,
    system: &RatingSystem,
    course_distance_nm: Option<f64>,
) -> Result<Correction> {
    let Some(elapsed) = elapsed_seconds else {
        return Ok(Correction {
            corrected_seconds: None,
            clamped: false,
        });
    };

    match system.calculation_type {
        CalculationType::TimeOnTime => {
            let tcf = resolve_tcf(rating, system)?;
            Ok(Correction {
                corrected_seconds: Some(elapsed * tcf),
                clamped: false,
            })
        }
        CalculationType::TimeOnDistance => {
            let distance = course_distance_nm.ok_or(ScoringError::MissingCourseDistance)?;
            let allowance = rating
                .rating_value
                .to_f64()
                .ok_or_else(|| ScoringError::InvalidRating(rating.rating_value.to_string()))?;
            let corrected = elapsed - allowance * distance;
            if corrected < 0.0 {
                Ok(Correction {
                    corrected_seconds: Some(0.0),
                    clamped: true,
                })
            } else {
                Ok(Correction {
                    corrected_seconds: Some(corrected),
                    clamped: false,
                })
            }
        }
    }
}

/// Picks the TCF for a time-on-time rating: the stored factor wins, otherwise
/// the system's derivation formula is applied to the rating value.
fn resolve_tcf(rating: &BoatRating, system: &RatingSystem) -> Result<f64> {
    if let Some(stored) = rating.time_correction_factor {
        return stored
            .to_f64()
            .ok_or(ScoringError::MissingCorrectionFactor);
    }

    let derived = match system.tcf_formula {
        TcfFormula::RatingIsTcf => rating.rating_value,
        TcfFormula::BaseOverOffsetPlusRating { base, offset } => {
            let denominator = offset + rating.rating_value;
            if denominator <= Decimal::ZERO {
                return Err(ScoringError::MissingCorrectionFactor);
            }
            base / denominator
        }
        TcfFormula::StoredTcfOnly | TcfFormula::NotApplicable => {
            return Err(ScoringError::MissingCorrectionFactor);
        }
    };

    if derived <= Decimal::ZERO {
        return Err(ScoringError::MissingCorrectionFactor);
    }
    derived.to_f64().ok_or(ScoringError::MissingCorrectionFactor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SystemCatalog;
    use crate::models::SailNumber;
    use uuid::Uuid;

    fn rating(system: &str, value: Decimal, tcf: Option<Decimal>) -> BoatRating {
        BoatRating {
            rating_id: Uuid::new_v4(),
            system_code: system.to_string(),
            sail_number: SailNumber::new("USA 101"),
            boat_name: None,
            rating_value: value,
            time_correction_factor: tcf,
            active: true,
            updated_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_time_on_time_with_stored_tcf() {
        let system = SystemCatalog::get("ORC").unwrap();
        let boat = rating("ORC", Decimal::from(600), Some(Decimal::new(105, 2)));

        let result = corrected_seconds(Some(3600.0), &boat, system, None).unwrap();
        let corrected = result.corrected_seconds.unwrap();
        assert!((corrected - 3780.0).abs() < 1e-9);
        assert!(!result.clamped);
    }

    #[test]
    fn test_irc_rating_value_is_the_tcf() {
        let system = SystemCatalog::get("IRC").unwrap();
        let boat = rating("IRC", Decimal::new(1100, 3), None);

        let result = corrected_seconds(Some(1000.0), &boat, system, None).unwrap();
        assert!((result.corrected_seconds.unwrap() - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_phrf_tot_derives_tcf_from_rating() {
        // 650 / (550 + 100) = 1.0 exactly.
        let system = SystemCatalog::get("PHRF-TOT").unwrap();
        let boat = rating("PHRF-TOT", Decimal::from(100), None);

        let result = corrected_seconds(Some(4321.0), &boat, system, None).unwrap();
        assert!((result.corrected_seconds.unwrap() - 4321.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_on_distance_allowance() {
        let system = SystemCatalog::get("PHRF").unwrap();
        let boat = rating("PHRF", Decimal::from(60), None);

        let result = corrected_seconds(Some(7200.0), &boat, system, Some(10.0)).unwrap();
        assert_eq!(result.corrected_seconds, Some(6600.0));
        assert!(!result.clamped);
    }

    #[test]
    fn test_time_on_distance_requires_distance() {
        let system = SystemCatalog::get("PHRF").unwrap();
        let boat = rating("PHRF", Decimal::from(60), None);

        assert_eq!(
            corrected_seconds(Some(7200.0), &boat, system, None),
            Err(ScoringError::MissingCourseDistance)
        );
    }

    #[test]
    fn test_negative_correction_clamps_to_zero() {
        let system = SystemCatalog::get("PHRF").unwrap();
        let boat = rating("PHRF", Decimal::from(600), None);

        let result = corrected_seconds(Some(100.0), &boat, system, Some(10.0)).unwrap();
        assert_eq!(result.corrected_seconds, Some(0.0));
        assert!(result.clamped);
    }

    #[test]
    fn test_non_finisher_is_never_an_error() {
        let system = SystemCatalog::get("PHRF").unwrap();
        let boat = rating("PHRF", Decimal::from(60), None);

        // Missing distance would be an error for a finisher; a DNF short-circuits.
        let result = corrected_seconds(None, &boat, system, None).unwrap();
        assert_eq!(result.corrected_seconds, None);
    }

    #[test]
    fn test_missing_correction_factor() {
        let system = SystemCatalog::get("ORC").unwrap();
        let boat = rating("ORC", Decimal::from(600), None);

        assert_eq!(
            corrected_seconds(Some(3600.0), &boat, system, None),
            Err(ScoringError::MissingCorrectionFactor)
        );
    }

    #[test]
    fn test_purity_identical_inputs_identical_outputs() {
        let system = SystemCatalog::get("IRC").unwrap();
        let boat = rating("IRC", Decimal::new(1037, 3), None);

        let a = corrected_seconds(Some(5432.1), &boat, system, None).unwrap();
        let b = corrected_seconds(Some(5432.1), &boat, system, None).unwrap();
        assert_eq!(
            a.corrected_seconds.unwrap().to_bits(),
            b.corrected_seconds.unwrap().to_bits()
        );
    }

    #[test]
    fn test_monotonic_in_course_distance() {
        let system = SystemCatalog::get("PHRF").unwrap();
        let boat = rating("PHRF", Decimal::from(60), None);

        let mut previous = f64::INFINITY;
        for distance in [1.0, 5.0, 10.0, 50.0, 500.0] {
            let corrected = corrected_seconds(Some(7200.0), &boat, system, Some(distance))
                .unwrap()
                .corrected_seconds
                .unwrap();
            assert!(corrected <= previous);
            assert!(corrected >= 0.0);
            previous = corrected;
        }
    }
}
