pub mod race;
pub mod rating;
pub mod standings;
