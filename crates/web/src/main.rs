use anyhow::Context;
use axum::Router;
use scoring::Store;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::systems::handlers::list_systems,
        features::systems::handlers::get_system,
        features::ratings::handlers::upsert_rating,
        features::ratings::handlers::deactivate_rating,
        features::ratings::handlers::list_system_ratings,
        features::races::handlers::record_results,
        features::races::handlers::calculate_race_results,
        features::races::handlers::calculate_regatta_results,
        features::standings::handlers::get_standings,
    ),
    components(
        schemas(
            scoring::models::RatingSystem,
            scoring::models::CalculationType,
            scoring::models::TcfFormula,
            scoring::models::SailNumber,
            scoring::models::ScoringWarning,
            scoring::dto::rating::UpsertRatingRequest,
            scoring::dto::rating::RatingResponse,
            scoring::dto::race::RaceEntryRequest,
            scoring::dto::race::RecordResultsRequest,
            scoring::dto::race::CorrectedResultResponse,
            scoring::dto::race::ScorecardResponse,
            scoring::dto::standings::StandingEntryResponse,
            scoring::dto::standings::StandingsResponse,
        )
    ),
    tags(
        (name = "systems", description = "Rating system catalog"),
        (name = "ratings", description = "Boat rating store"),
        (name = "races", description = "Race results and corrected-time scoring"),
        (name = "standings", description = "Series standings"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting corrected-time scoring API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let store = Store::new();
    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/systems", features::systems::routes::routes())
        .nest(
            "/api/ratings",
            features::ratings::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/regattas",
            features::races::routes::routes(api_keys)
                .merge(features::standings::routes::routes()),
        )
        .layer(cors)
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
