use axum::{Router, routing::get};
use scoring::Store;

use super::handlers::{get_system, list_systems};
use crate::features::ratings::handlers::list_system_ratings;

pub fn routes() -> Router<Store> {
    Router::new()
        .route("/", get(list_systems))
        .route("/:code", get(get_system))
        .route("/:code/ratings", get(list_system_ratings))
}
