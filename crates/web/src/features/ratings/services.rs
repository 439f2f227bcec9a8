use scoring::Store;
use scoring::dto::rating::UpsertRatingRequest;
use scoring::error::Result;
use scoring::models::BoatRating;
use scoring::repository::RatingRepository;
use uuid::Uuid;

/// Create or update the active rating for (system, sail number)
pub fn upsert_rating(store: &Store, request: &UpsertRatingRequest) -> Result<BoatRating> {
    let repo = RatingRepository::new(store);
    repo.upsert(
        &request.system_code,
        &request.sail_number,
        request.rating_value,
        request.time_correction_factor,
        request.boat_name.clone(),
    )
}

/// Soft-delete a rating
pub fn deactivate_rating(store: &Store, rating_id: Uuid) -> Result<BoatRating> {
    let repo = RatingRepository::new(store);
    repo.deactivate(rating_id)
}

/// Active ratings for one system, ordered by sail number
pub fn list_system_ratings(store: &Store, system_code: &str) -> Result<Vec<BoatRating>> {
    let repo = RatingRepository::new(store);
    repo.list_by_system(system_code)
}
