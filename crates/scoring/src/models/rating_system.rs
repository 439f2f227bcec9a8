use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How a rating system turns elapsed time into corrected time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CalculationType {
    /// Corrected = elapsed × time correction factor.
    TimeOnTime,
    /// Corrected = elapsed − allowance (sec/nm) × course distance.
    TimeOnDistance,
}

/// How a time-on-time system derives a TCF from the stored rating value.
///
/// This is a closed set: systems whose derivation is not publicly specified
/// use `StoredTcfOnly` and require the TCF to be entered on the rating itself
/// rather than guessing a formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TcfFormula {
    /// The rating value is already the TCF (IRC publishes TCC directly).
    RatingIsTcf,
    /// TCF = base / (offset + rating), e.g. PHRF time-on-time 650/(550+R).
    BaseOverOffsetPlusRating { base: Decimal, offset: Decimal },
    /// No published derivation; a stored TCF is mandatory.
    StoredTcfOnly,
    /// Time-on-distance systems never derive a TCF.
    NotApplicable,
}

/// A handicap rating system catalog entry
///
/// Immutable reference data: created at configuration time, never mutated at
/// runtime. The calculator dispatches on `calculation_type`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RatingSystem {
    /// Unique short id, e.g. "PHRF", "IRC".
    pub code: String,
    pub name: String,
    pub calculation_type: CalculationType,
    /// Decimal places for displaying ratings and corrected times.
    pub rating_precision: u32,
    pub tcf_formula: TcfFormula,
    /// Accent color used by leaderboard consumers.
    pub display_color: String,
}
