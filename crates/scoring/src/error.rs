use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Not found")]
    NotFound,

    #[error("No usable time correction factor for this rating")]
    MissingCorrectionFactor,

    #[error("Time-on-distance scoring requires a course distance")]
    MissingCourseDistance,

    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    #[error("Invalid race entry: {0}")]
    InvalidEntry(String),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn is_configuration_gap(&self) -> bool {
        matches!(
            self,
            ScoringError::MissingCorrectionFactor | ScoringError::MissingCourseDistance
        )
    }
}
