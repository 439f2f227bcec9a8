use axum::{
    Json,
    extract::Path,
    response::{IntoResponse, Response},
};
use scoring::models::RatingSystem;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/systems",
    responses(
        (status = 200, description = "List all supported rating systems", body = Vec<RatingSystem>)
    ),
    tag = "systems"
)]
pub async fn list_systems() -> Result<Response, WebError> {
    Ok(Json(services::list_systems()).into_response())
}

#[utoipa::path(
    get,
    path = "/api/systems/{code}",
    params(
        ("code" = String, Path, description = "Rating system code, e.g. PHRF")
    ),
    responses(
        (status = 200, description = "Rating system found", body = RatingSystem),
        (status = 404, description = "Unknown rating system")
    ),
    tag = "systems"
)]
pub async fn get_system(Path(code): Path<String>) -> Result<Response, WebError> {
    let system = services::get_system(&code)?;

    Ok(Json(system).into_response())
}
