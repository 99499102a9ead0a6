//! HTTP surface of the Football Hub analytics reports
//!
//! Read-only JSON endpoints, one per report, plus an OpenAPI document and
//! Swagger UI.

pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use sea_orm::DatabaseConnection;

pub use error::ApiError;

/// Application state shared across handlers
pub struct AppState {
    pub db: DatabaseConnection,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Football Hub API",
        version = "0.1.0",
        description = "Read-only analytics over clubs, players, matches and transfers"
    ),
    paths(
        handlers::matches,
        handlers::player_stats,
        handlers::transfers,
        handlers::search,
        handlers::overview,
        handlers::health_check,
    ),
    components(
        schemas(
            football_hub_analytics::MatchReport,
            football_hub_analytics::PlayerReport,
            football_hub_analytics::TransferReport,
            football_hub_analytics::SearchReport,
            football_hub_analytics::SearchKind,
            football_hub_analytics::Overview,
            models::HealthResponse,
            models::ErrorResponse,
        )
    ),
    tags(
        (name = "matches", description = "Match list and match statistics"),
        (name = "players", description = "Player statistics"),
        (name = "transfers", description = "Transfer market analytics"),
        (name = "search", description = "Player and club search"),
        (name = "system", description = "System health and info endpoints")
    )
)]
pub struct ApiDoc;

/// API server configuration
pub struct ApiServerConfig {
    /// Address to bind the API server
    pub bind_addr: SocketAddr,
    /// Enable CORS for local development origins
    pub enable_cors: bool,
}

impl Default for ApiServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            enable_cors: true,
        }
    }
}

/// API Server
pub struct ApiServer {
    config: ApiServerConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create a new API server over an already migrated database
    pub fn new(config: ApiServerConfig, db: DatabaseConnection) -> Self {
        let state = Arc::new(AppState { db });

        Self { config, state }
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let api_doc = ApiDoc::openapi();

        let api_router = Router::new()
            .route("/api/matches", get(handlers::matches))
            .route("/api/player-stats", get(handlers::player_stats))
            .route("/api/transfers", get(handlers::transfers))
            .route("/api/search", get(handlers::search))
            .route("/api/overview", get(handlers::overview))
            .route("/api/health", get(handlers::health_check))
            .with_state(self.state.clone());

        // SwaggerUi serves /api/openapi.json itself
        let router = Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", api_doc))
            .merge(api_router);

        let mut router = router.layer(TraceLayer::new_for_http());

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE])
                .allow_origin(AllowOrigin::predicate(|origin: &HeaderValue, _| {
                    let origin_str = origin.to_str().unwrap_or("");
                    origin_str.starts_with("http://localhost:")
                        || origin_str.starts_with("http://127.0.0.1:")
                }));
            router = router.layer(cors);
        }

        router
    }

    /// Start the API server
    pub async fn start(self) -> Result<(), anyhow::Error> {
        let router = self.build_router();

        info!("Starting API server on {}", self.config.bind_addr);
        info!(
            "OpenAPI spec: http://{}/api/openapi.json",
            self.config.bind_addr
        );
        info!("Swagger UI: http://{}/swagger-ui", self.config.bind_addr);

        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        axum::serve(listener, router)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_generation() {
        let api_doc = ApiDoc::openapi();

        assert!(api_doc.paths.paths.contains_key("/api/matches"));
        assert!(api_doc.paths.paths.contains_key("/api/search"));
    }

    #[test]
    fn test_default_config() {
        let config = ApiServerConfig::default();

        assert_eq!(config.bind_addr.port(), 3000);
        assert!(config.enable_cors);
    }
}
