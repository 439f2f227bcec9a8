use axum::{Router, routing::get};
use scoring::Store;

use super::handlers::get_standings;

pub fn routes() -> Router<Store> {
    Router::new().route("/:regatta_id/standings", get(get_standings))
}
