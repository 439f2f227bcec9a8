use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::Store;
use scoring::dto::race::{RecordResultsRequest, ScorecardResponse, ScoringQuery};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/regattas/{regatta_id}/races/{race_number}/results",
    params(
        ("regatta_id" = Uuid, Path, description = "Regatta ID"),
        ("race_number" = u32, Path, description = "Race number within the regatta")
    ),
    request_body = RecordResultsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Race results recorded"),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "races"
)]
pub async fn record_results(
    State(store): State<Store>,
    Path((regatta_id, race_number)): Path<(Uuid, u32)>,
    Json(req): Json<RecordResultsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let results = services::record_results(&store, regatta_id, race_number, req.into_entries())?;

    tracing::info!(
        %regatta_id,
        race_number,
        entries = results.len(),
        "Recorded race results"
    );

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "regatta_id": regatta_id,
            "race_number": race_number,
            "recorded_entries": results.len()
        })),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/regattas/{regatta_id}/races/{race_number}/results",
    params(
        ("regatta_id" = Uuid, Path, description = "Regatta ID"),
        ("race_number" = u32, Path, description = "Race number within the regatta"),
        ScoringQuery
    ),
    responses(
        (status = 200, description = "Corrected and ranked results for the race", body = ScorecardResponse),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Unknown regatta, race, or rating system"),
        (status = 422, description = "Scoring configuration gap, e.g. missing course distance")
    ),
    tag = "races"
)]
pub async fn calculate_race_results(
    State(store): State<Store>,
    Path((regatta_id, race_number)): Path<(Uuid, u32)>,
    Query(query): Query<ScoringQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let scorecard = services::calculate_race_results(
        &store,
        regatta_id,
        race_number,
        &query.system,
        query.distance_nm,
    )?;

    Ok(Json(ScorecardResponse::from(scorecard)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/regattas/{regatta_id}/results",
    params(
        ("regatta_id" = Uuid, Path, description = "Regatta ID"),
        ScoringQuery
    ),
    responses(
        (status = 200, description = "Scorecards for every recorded race of the regatta", body = Vec<ScorecardResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "No recorded races for this regatta"),
        (status = 422, description = "Scoring configuration gap, e.g. missing course distance")
    ),
    tag = "races"
)]
pub async fn calculate_regatta_results(
    State(store): State<Store>,
    Path(regatta_id): Path<Uuid>,
    Query(query): Query<ScoringQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let scorecards =
        services::calculate_regatta_results(&store, regatta_id, &query.system, query.distance_nm)?;

    let response: Vec<ScorecardResponse> =
        scorecards.into_iter().map(ScorecardResponse::from).collect();

    Ok(Json(response).into_response())
}
