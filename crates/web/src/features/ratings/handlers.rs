use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::Store;
use scoring::dto::rating::{RatingResponse, UpsertRatingRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/ratings",
    request_body = UpsertRatingRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Rating created or updated", body = RatingResponse),
        (status = 400, description = "Validation error or invalid rating value"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Unknown rating system")
    ),
    tag = "ratings"
)]
pub async fn upsert_rating(
    State(store): State<Store>,
    Json(req): Json<UpsertRatingRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let rating = services::upsert_rating(&store, &req)?;

    Ok((StatusCode::CREATED, Json(RatingResponse::from(rating))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/ratings/{rating_id}",
    params(
        ("rating_id" = Uuid, Path, description = "Rating ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Rating deactivated", body = RatingResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Rating not found")
    ),
    tag = "ratings"
)]
pub async fn deactivate_rating(
    State(store): State<Store>,
    Path(rating_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let rating = services::deactivate_rating(&store, rating_id)?;

    Ok(Json(RatingResponse::from(rating)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/systems/{code}/ratings",
    params(
        ("code" = String, Path, description = "Rating system code")
    ),
    responses(
        (status = 200, description = "Active ratings for the system, ordered by sail number", body = Vec<RatingResponse>),
        (status = 404, description = "Unknown rating system")
    ),
    tag = "ratings"
)]
pub async fn list_system_ratings(
    State(store): State<Store>,
    Path(code): Path<String>,
) -> Result<Response, WebError> {
    let ratings = services::list_system_ratings(&store, &code)?;

    let response: Vec<RatingResponse> = ratings.into_iter().map(RatingResponse::from).collect();

    Ok(Json(response).into_response())
}
