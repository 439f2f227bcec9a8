mod boat_rating;
mod corrected;
mod race;
mod rating_system;
mod sail_number;
mod standings;

pub use boat_rating::BoatRating;
pub use corrected::{CorrectedResult, RaceScorecard, ScoringWarning};
pub use race::RaceResult;
pub use rating_system::{CalculationType, RatingSystem, TcfFormula};
pub use sail_number::SailNumber;
pub use standings::{DiscardPolicy, PointsPolicy, ScoringPolicy, StandingEntry};
