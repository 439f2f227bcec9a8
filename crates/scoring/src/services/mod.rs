pub mod corrected_time;
pub mod race_scoring;
pub mod ranking;
pub mod standings;
