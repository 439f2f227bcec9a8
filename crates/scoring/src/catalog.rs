use rust_decimal::Decimal;
use std::sync::LazyLock;

use crate::error::{Result, ScoringError};
use crate::models::{CalculationType, RatingSystem, TcfFormula};

/// The built-in handicap systems. Read-only at runtime; adding a system is a
/// configuration change, not a data mutation.
static SYSTEMS: LazyLock<Vec<RatingSystem>> = LazyLock::new(|| {
    vec![
        RatingSystem {
            code: "PHRF".to_string(),
            name: "Performance Handicap Racing Fleet".to_string(),
            calculation_type: CalculationType::TimeOnDistance,
            rating_precision: 0,
            tcf_formula: TcfFormula::NotApplicable,
            display_color: "#1e6fb8".to_string(),
        },
        RatingSystem {
            code: "PHRF-TOT".to_string(),
            name: "PHRF Time-on-Time".to_string(),
            calculation_type: CalculationType::TimeOnTime,
            rating_precision: 3,
            tcf_formula: TcfFormula::BaseOverOffsetPlusRating {
                base: Decimal::from(650),
                offset: Decimal::from(550),
            },
            display_color: "#2a9d8f".to_string(),
        },
        RatingSystem {
            code: "IRC".to_string(),
            name: "International Rating Certificate".to_string(),
            calculation_type: CalculationType::TimeOnTime,
            rating_precision: 3,
            tcf_formula: TcfFormula::RatingIsTcf,
            display_color: "#b8321e".to_string(),
        },
        RatingSystem {
            code: "ORC".to_string(),
            name: "Offshore Racing Congress".to_string(),
            calculation_type: CalculationType::TimeOnTime,
            rating_precision: 4,
            // ORC derivation depends on the certificate scoring option; a
            // stored TCF is required rather than guessing one.
            tcf_formula: TcfFormula::StoredTcfOnly,
            display_color: "#e0a514".to_string(),
        },
    ]
});

pub struct SystemCatalog;

impl SystemCatalog {
    pub fn all() -> &'static [RatingSystem] {
        &SYSTEMS
    }

    /// Case-insensitive lookup on the trimmed code.
    pub fn get(code: &str) -> Result<&'static RatingSystem> {
        let wanted = code.trim().to_uppercase();
        SYSTEMS
            .iter()
            .find(|s| s.code == wanted)
            .ok_or(ScoringError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let system = SystemCatalog::get(" irc ").unwrap();
        assert_eq!(system.code, "IRC");
    }

    #[test]
    fn test_unknown_code_is_not_found() {
        assert!(matches!(
            SystemCatalog::get("NOPE"),
            Err(ScoringError::NotFound)
        ));
    }

    #[test]
    fn test_every_system_has_one_calculation_type() {
        for system in SystemCatalog::all() {
            match system.calculation_type {
                CalculationType::TimeOnDistance => {
                    assert_eq!(system.tcf_formula, TcfFormula::NotApplicable)
                }
                CalculationType::TimeOnTime => {
                    assert_ne!(system.tcf_formula, TcfFormula::NotApplicable)
                }
            }
        }
    }
}
