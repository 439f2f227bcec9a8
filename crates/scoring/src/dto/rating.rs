use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::catalog::SystemCatalog;
use crate::display::format_rating;
use crate::models::BoatRating;
use validator::Validate;

/// Request payload for creating or updating a boat rating
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpsertRatingRequest {
    #[validate(length(min = 1, max = 16, message = "System code must be 1-16 characters"))]
    pub system_code: String,

    #[validate(length(
        min = 1,
        max = 32,
        message = "Sail number must be between 1 and 32 characters"
    ))]
    pub sail_number: String,

    pub rating_value: Decimal,

    pub time_correction_factor: Option<Decimal>,

    #[validate(length(max = 255))]
    pub boat_name: Option<String>,
}

/// Response containing a boat rating
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RatingResponse {
    pub rating_id: Uuid,
    pub system_code: String,
    pub sail_number: String,
    pub boat_name: Option<String>,
    pub rating_value: Decimal,
    /// Rating rounded to the system's display precision.
    pub rating_display: String,
    pub time_correction_factor: Option<Decimal>,
    pub active: bool,
    pub updated_at: chrono::NaiveDateTime,
}

impl From<BoatRating> for RatingResponse {
    fn from(rating: BoatRating) -> Self {
        let precision = SystemCatalog::get(&rating.system_code)
            .map(|s| s.rating_precision)
            .unwrap_or(2);
        Self {
            rating_display: format_rating(rating.rating_value, precision),
            rating_id: rating.rating_id,
            system_code: rating.system_code,
            sail_number: rating.sail_number.to_string(),
            boat_name: rating.boat_name,
            rating_value: rating.rating_value,
            time_correction_factor: rating.time_correction_factor,
            active: rating.active,
            updated_at: rating.updated_at,
        }
    }
}
