use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use scoring::Store;
use scoring::dto::standings::{StandingEntryResponse, StandingsQuery, StandingsResponse};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/regattas/{regatta_id}/standings",
    params(
        ("regatta_id" = Uuid, Path, description = "Regatta ID"),
        StandingsQuery
    ),
    responses(
        (status = 200, description = "Series standings, ranked ascending by net points", body = StandingsResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "No recorded races for this regatta"),
        (status = 422, description = "Scoring configuration gap, e.g. missing course distance")
    ),
    tag = "standings"
)]
pub async fn get_standings(
    State(store): State<Store>,
    Path(regatta_id): Path<Uuid>,
    Query(query): Query<StandingsQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let policy = query.scoring_policy();
    let entries = services::get_standings(
        &store,
        regatta_id,
        &query.system,
        query.distance_nm,
        &policy,
    )?;

    let response = StandingsResponse {
        regatta_id,
        system_code: query.system.trim().to_uppercase(),
        entries: entries
            .into_iter()
            .map(StandingEntryResponse::from)
            .collect(),
    };

    Ok(Json(response).into_response())
}
