//! HTTP transport implementation.
//!
//! Plain JSON over HTTP:
//!
//! | Method | Path                  | Response                      |
//! |--------|-----------------------|-------------------------------|
//! | POST   | `/`                   | manifest                      |
//! | GET    | `/schema`             | manifest                      |
//! | GET    | `/`                   | server summary                |
//! | POST   | `/invoke`             | tool result                   |
//! | GET    | `/resources/insights` | insight records and count     |
//! | GET    | `/health`             | liveness                      |

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::FeedbackServer;
use crate::domains::resources::{InsightsResource, ResourceDefinition};
use crate::domains::tools::ToolError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Body of `POST /invoke`.
#[derive(Debug, Clone, Deserialize)]
pub struct InvokeRequest {
    pub tool_name: String,
    pub params: Map<String, Value>,
}

/// Query string of the insights endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightsQuery {
    pub limit: Option<usize>,
}

/// Errors returned to HTTP clients as `{"detail": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// A domain tool error.
    Tool(ToolError),
    /// The request body was not a valid invocation.
    Body(JsonRejection),
    /// The query string could not be parsed.
    Query(QueryRejection),
}

impl From<ToolError> for ApiError {
    fn from(err: ToolError) -> Self {
        Self::Tool(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Query(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Tool(err @ ToolError::NotFound(_)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Body(rejection) => (rejection.status(), rejection.body_text()),
            Self::Query(rejection) => (rejection.status(), rejection.body_text()),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: FeedbackServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Manifest: POST / , GET /schema");
        info!("  → Invoke:   POST /invoke");
        info!("  → Insights: GET {}", InsightsResource::ENDPOINT);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the router serving every endpoint.
pub fn build_router(server: FeedbackServer, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .route("/", get(summary_handler).post(manifest_handler))
        .route("/schema", get(manifest_handler))
        .route("/invoke", post(invoke_handler))
        .route(InsightsResource::ENDPOINT, get(insights_handler))
        .route("/health", get(health_check))
        .with_state(server);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app.layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Manifest handler. The request body, if any, is ignored.
async fn manifest_handler(State(server): State<FeedbackServer>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        server.manifest_json().to_string(),
    )
}

/// Root handler - summary of the server.
async fn summary_handler(State(server): State<FeedbackServer>) -> impl IntoResponse {
    Json(server.summary())
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Invoke a tool.
#[instrument(skip_all, fields(tool))]
async fn invoke_handler(
    State(server): State<FeedbackServer>,
    request: Result<Json<InvokeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = request.inspect_err(|e| warn!("Rejected invocation: {}", e))?;
    tracing::Span::current().record("tool", request.tool_name.as_str());
    info!("Received invocation for {}", request.tool_name);

    let result = server.call_tool(&request.tool_name, &request.params)?;
    Ok(Json(result))
}

/// List insight records.
async fn insights_handler(
    State(server): State<FeedbackServer>,
    query: Result<Query<InsightsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    Ok(Json(server.list_insights(query.limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError::from(ToolError::not_found("translate")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invoke_request_requires_params() {
        let parsed: Result<InvokeRequest, _> =
            serde_json::from_str(r#"{ "tool_name": "sentiment_check" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_address() {
        let transport = HttpTransport::new(HttpConfig {
            port: 9000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        });
        assert_eq!(transport.address(), "0.0.0.0:9000");
    }
}
