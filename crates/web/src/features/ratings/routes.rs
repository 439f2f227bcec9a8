use axum::{
    Router, middleware,
    routing::{delete, post},
};
use scoring::Store;

use super::handlers::{deactivate_rating, upsert_rating};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Store> {
    Router::new()
        .route("/", post(upsert_rating))
        .route("/:rating_id", delete(deactivate_rating))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth))
}
