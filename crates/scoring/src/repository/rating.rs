use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::catalog::SystemCatalog;
use crate::error::{Result, ScoringError};
use crate::models::{BoatRating, CalculationType, RatingSystem, SailNumber, TcfFormula};
use crate::store::Store;

/// Ratings a time-on-distance allowance can plausibly take, in sec/nm.
const MIN_ALLOWANCE: i64 = -600;
const MAX_ALLOWANCE: i64 = 1200;

/// Bounds for TCF-like values (time-on-time rating values and stored TCFs).
const MIN_TCF: f64 = 0.1;
const MAX_TCF: f64 = 3.0;

pub struct RatingRepository<'a> {
    store: &'a Store,
}

impl<'a> RatingRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates or updates the active rating for (system, sail number).
    ///
    /// An existing active rating is overwritten in place; past scorecards keep
    /// the value they snapshotted, anything recomputed sees the new value.
    pub fn upsert(
        &self,
        system_code: &str,
        sail_number: &str,
        rating_value: Decimal,
        time_correction_factor: Option<Decimal>,
        boat_name: Option<String>,
    ) -> Result<BoatRating> {
        let system = SystemCatalog::get(system_code)?;
        let sail_number = SailNumber::new(sail_number);
        if sail_number.is_empty() {
            return Err(ScoringError::InvalidRating(
                "sail number must not be empty".to_string(),
            ));
        }
        validate_rating_value(system, rating_value)?;
        if let Some(tcf) = time_correction_factor {
            validate_tcf(tcf)?;
        }

        let mut ratings = self.store.ratings_mut();
        let now = Utc::now().naive_utc();

        if let Some(existing) = ratings
            .iter_mut()
            .find(|r| r.active && r.system_code == system.code && r.sail_number == sail_number)
        {
            existing.rating_value = rating_value;
            existing.time_correction_factor = time_correction_factor;
            if boat_name.is_some() {
                existing.boat_name = boat_name;
            }
            existing.updated_at = now;
            return Ok(existing.clone());
        }

        let rating = BoatRating {
            rating_id: Uuid::new_v4(),
            system_code: system.code.clone(),
            sail_number,
            boat_name,
            rating_value,
            time_correction_factor,
            active: true,
            updated_at: now,
        };
        ratings.push(rating.clone());
        Ok(rating)
    }

    /// Soft-deletes a rating. Computed results are never cascaded.
    pub fn deactivate(&self, rating_id: Uuid) -> Result<BoatRating> {
        let mut ratings = self.store.ratings_mut();
        let rating = ratings
            .iter_mut()
            .find(|r| r.rating_id == rating_id)
            .ok_or(ScoringError::NotFound)?;
        rating.active = false;
        rating.updated_at = Utc::now().naive_utc();
        Ok(rating.clone())
    }

    /// Active ratings for a system, ordered by sail number.
    pub fn list_by_system(&self, system_code: &str) -> Result<Vec<BoatRating>> {
        let system = SystemCatalog::get(system_code)?;
        let mut result: Vec<BoatRating> = self
            .store
            .ratings()
            .iter()
            .filter(|r| r.active && r.system_code == system.code)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.sail_number.cmp(&b.sail_number));
        Ok(result)
    }

    /// Exact match on the normalized sail number; no fuzzy matching.
    pub fn find(&self, system_code: &str, sail_number: &SailNumber) -> Result<BoatRating> {
        let system = SystemCatalog::get(system_code)?;
        self.store
            .ratings()
            .iter()
            .find(|r| r.active && r.system_code == system.code && r.sail_number == *sail_number)
            .cloned()
            .ok_or(ScoringError::NotFound)
    }
}

fn validate_rating_value(system: &RatingSystem, value: Decimal) -> Result<()> {
    if system.calculation_type == CalculationType::TimeOnDistance {
        if value < Decimal::from(MIN_ALLOWANCE) || value > Decimal::from(MAX_ALLOWANCE) {
            return Err(ScoringError::InvalidRating(format!(
                "allowance {value} sec/nm is outside [{MIN_ALLOWANCE}, {MAX_ALLOWANCE}]"
            )));
        }
        return Ok(());
    }
    // What a time-on-time rating value may look like depends on how the
    // system derives the TCF from it. Derived-allowance systems take signed
    // values; only the resulting multiplier has to stay positive.
    match system.tcf_formula {
        TcfFormula::RatingIsTcf => {
            if value <= Decimal::ZERO {
                return Err(ScoringError::InvalidRating(format!(
                    "time correction factor {value} must be positive"
                )));
            }
        }
        TcfFormula::BaseOverOffsetPlusRating { offset, .. } => {
            if offset + value <= Decimal::ZERO {
                return Err(ScoringError::InvalidRating(format!(
                    "rating {value} makes the correction denominator non-positive"
                )));
            }
        }
        // The rating value is informational here; the stored TCF carries
        // the computation and is validated separately.
        TcfFormula::StoredTcfOnly | TcfFormula::NotApplicable => {}
    }
    Ok(())
}

fn validate_tcf(tcf: Decimal) -> Result<()> {
    let min = Decimal::try_from(MIN_TCF).unwrap_or(Decimal::ZERO);
    let max = Decimal::try_from(MAX_TCF).unwrap_or(Decimal::from(3));
    if tcf < min || tcf > max {
        return Err(ScoringError::InvalidRating(format!(
            "time correction factor {tcf} is outside [{MIN_TCF}, {MAX_TCF}]"
        )));
    }
    Ok(())
}
