pub mod race;
pub mod rating;

pub use race::{RaceEntry, RaceRepository};
pub use rating::RatingRepository;
