use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use std::collections::HashSet;

#[derive(Clone)]
pub struct ApiKeys {
    keys: HashSet<String>,
}

impl ApiKeys {
    pub fn from_comma_separated(keys_str: &str) -> Self {
        let keys = keys_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self { keys }
    }

    pub fn is_valid(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

pub async fn require_auth(
    State(api_keys): State<ApiKeys>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| api_keys.is_valid(token));

    if authorized {
        Ok(next.run(request).await)
    } else {
        tracing::warn!("Invalid API key attempt");
        Err(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_trimmed_and_empty_entries_dropped() {
        let keys = ApiKeys::from_comma_separated(" alpha , ,beta,");
        assert!(keys.is_valid("alpha"));
        assert!(keys.is_valid("beta"));
        assert!(!keys.is_valid(""));
        assert!(!keys.is_valid("gamma"));
    }
}
