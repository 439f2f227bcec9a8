use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scoring::error::ScoringError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Scoring(ScoringError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scoring(e) => write!(f, "Scoring error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Scoring(ScoringError::NotFound) => StatusCode::NOT_FOUND,
            Self::Scoring(ScoringError::InvalidRating(_) | ScoringError::InvalidEntry(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Scoring(e) if e.is_configuration_gap() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Scoring(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = match &self {
            Self::Scoring(ScoringError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Scoring(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ScoringError> for WebError {
    fn from(error: ScoringError) -> Self {
        Self::Scoring(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
