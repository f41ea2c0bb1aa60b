use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::cli::ServeArgs;
use crate::core::request::{RecommendRequest, RequestError};
use crate::matching::engine::{MatchResult, MatchingEngine};

/// Default request body limit (2MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Server settings, built from `serve` arguments at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Requests still running after this are answered with 408
    pub request_timeout: Duration,
    /// Maximum requests in flight across all clients
    pub max_concurrency: usize,
    /// Sustained requests per second per client IP
    pub rate_per_second: u64,
    /// Burst size per client IP
    pub rate_burst: u32,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8000,
            request_timeout: Duration::from_secs(30),
            max_concurrency: 100,
            rate_per_second: 10,
            rate_burst: 50,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// Body of a successful `POST /recommend`
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<MatchResult>,
}

/// Error body returned for every rejected request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_type: String,
    pub details: Option<String>,
}

/// Create an error response with a client-facing message, logging the
/// internal cause server-side only
pub fn create_safe_error_response(
    error_type: &str,
    user_message: &str,
    internal_error: Option<&str>,
) -> ErrorResponse {
    if let Some(internal_msg) = internal_error {
        tracing::warn!("Rejected request ({}): {}", error_type, internal_msg);
    }

    ErrorResponse {
        error: user_message.to_string(),
        error_type: error_type.to_string(),
        details: None,
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingField { .. } | Self::MalformedTeam { .. } => StatusCode::BAD_REQUEST,
            Self::TooManyTeams { .. } | Self::TooManySkills { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        };

        let message = match self {
            Self::MissingField { .. } => "Request is missing a required field",
            Self::MalformedTeam { .. } => "A team in the request is malformed",
            Self::TooManyTeams { .. } => "Too many teams in request",
            Self::TooManySkills { .. } => "Too many user skills in request",
        };

        tracing::warn!(error_type = self.kind(), error = %self, "Rejected recommend request");

        // Details only describe the caller's own payload
        let body = ErrorResponse {
            error: message.to_string(),
            error_type: self.kind().to_string(),
            details: Some(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Map a body extraction failure onto the service's error format
fn json_rejection_response(rejection: &JsonRejection) -> Response {
    let (status, error_type, message) = match rejection {
        JsonRejection::MissingJsonContentType(_) => (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported_media_type",
            "Expected request with `Content-Type: application/json`",
        ),
        _ if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "payload_too_large",
            "Request body exceeds size limit",
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            "invalid_json",
            "Request body is not a valid recommendation request",
        ),
    };

    let internal = rejection.body_text();
    let body = create_safe_error_response(error_type, message, Some(internal.as_str()));
    (status, Json(body)).into_response()
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server fails to start.
pub fn run(args: &ServeArgs) -> anyhow::Result<()> {
    let config = ServerConfig::from(args);
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(config).await })
}

/// Create the application router with all routes and middleware configured.
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid (zero rate or burst).
pub fn create_router(config: &ServerConfig) -> anyhow::Result<Router> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_per_second)
        .burst_size(config.rate_burst)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("Rate limit and burst size must be greater than zero"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/recommend", post(recommend_handler))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                // Per-IP rate limiting
                .layer(GovernorLayer {
                    config: Arc::new(governor_conf),
                })
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout,
                ))
                .layer(ConcurrencyLimitLayer::new(config.max_concurrency))
                .layer(DefaultBodyLimit::max(config.max_body_bytes)),
        );

    Ok(app)
}

async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(&config)?;

    let addr = format!("{}:{}", config.address, config.port);
    tracing::info!(%addr, "Starting skill-match web server");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Liveness probe
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// API endpoint ranking teams against a user's skills
async fn recommend_handler(
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, Response> {
    let Json(request) = payload.map_err(|rejection| json_rejection_response(&rejection))?;
    let request = request.validate().map_err(IntoResponse::into_response)?;

    let engine = MatchingEngine::from_request(&request);
    let recommendations = engine.find_matches(&request.teams);

    tracing::debug!(
        user_skills = request.user_skills.len(),
        teams = request.teams.len(),
        recommendations = recommendations.len(),
        "Recommend request served"
    );

    Ok(Json(RecommendResponse { recommendations }))
}
