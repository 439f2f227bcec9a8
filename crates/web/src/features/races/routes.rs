use axum::{
    Router, middleware,
    routing::{get, post},
};
use scoring::Store;

use super::handlers::{calculate_race_results, calculate_regatta_results, record_results};
use crate::middleware::auth::{ApiKeys, require_auth};

pub fn routes(api_keys: ApiKeys) -> Router<Store> {
    let protected = Router::new()
        .route("/:regatta_id/races/:race_number/results", post(record_results))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route(
            "/:regatta_id/races/:race_number/results",
            get(calculate_race_results),
        )
        .route("/:regatta_id/results", get(calculate_regatta_results))
        .merge(protected)
}
