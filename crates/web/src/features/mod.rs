pub mod races;
pub mod ratings;
pub mod standings;
pub mod systems;
