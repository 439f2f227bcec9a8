use scoring::catalog::SystemCatalog;
use scoring::error::Result;
use scoring::models::RatingSystem;

/// List all supported rating systems
pub fn list_systems() -> &'static [RatingSystem] {
    SystemCatalog::all()
}

/// Get a rating system by code
pub fn get_system(code: &str) -> Result<&'static RatingSystem> {
    SystemCatalog::get(code)
}
