// crates/form-lens-proxy/src/relay.rs
// ============================================================================
// Module: Relay Handler
// Description: CORS-enabled relay of form-definition requests.
// Purpose: Forward authenticated GETs to the upstream API and relay bodies.
// Dependencies: axum, reqwest, serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Browser clients cannot call the form provider API directly because it
//! sends no CORS headers. This relay accepts `GET /typeform-proxy?formId=..`,
//! forwards the request upstream with the caller's token as a bearer
//! credential, and relays the JSON body and status code back with permissive
//! CORS headers attached.
//!
//! ## Invariants
//! - Every response carries the CORS header set, error responses included.
//! - Upstream status codes are preserved; only transport failures map to 502.
//! - The token is forwarded, never logged or stored.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default upstream endpoint for form definitions.
const DEFAULT_UPSTREAM_URL: &str = "https://api.typeform.com/forms";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the personal access token from the client.
const TOKEN_HEADER: &str = "x-typeform-token";

/// CORS header set attached to every response.
const CORS_HEADERS: [(header::HeaderName, &str); 3] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, OPTIONS"),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, x-typeform-token"),
];

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while constructing or serving the relay.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The upstream HTTP client could not be constructed.
    #[error("relay client construction failed: {0}")]
    Client(String),
    /// The listen address could not be bound.
    #[error("relay bind failed: {0}")]
    Bind(String),
    /// The server loop failed.
    #[error("relay server failed: {0}")]
    Serve(String),
}

// ============================================================================
// SECTION: Configuration and State
// ============================================================================

/// Configuration for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Upstream endpoint; the form ID is appended as a path segment.
    pub upstream_url: String,
    /// Upstream request timeout.
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Shared relay state handed to the handlers.
#[derive(Debug)]
pub struct RelayState {
    /// Async HTTP client used for upstream requests.
    client: reqwest::Client,
    /// Upstream endpoint configuration.
    config: RelayConfig,
}

impl RelayState {
    /// Builds relay state with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Client`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(config.timeout)
            .build()
            .map_err(|err| RelayError::Client(err.to_string()))?;
        Ok(Self {
            client,
            config,
        })
    }
}

/// Builds the relay router.
#[must_use]
pub fn build_router(state: Arc<RelayState>) -> Router {
    Router::new()
        .route(
            "/typeform-proxy",
            get(handle_fetch).options(handle_preflight).fallback(handle_method_not_allowed),
        )
        .with_state(state)
}

// ============================================================================
// SECTION: Handlers
// ============================================================================

/// Query parameters accepted by the relay.
#[derive(Debug, Deserialize)]
struct RelayQuery {
    /// Form identifier to fetch upstream.
    #[serde(rename = "formId")]
    form_id: Option<String>,
    /// Token as a query-parameter alternative to the header.
    token: Option<String>,
}

/// Handles `GET /typeform-proxy`.
async fn handle_fetch(
    State(state): State<Arc<RelayState>>,
    Query(query): Query<RelayQuery>,
    headers: HeaderMap,
) -> Response {
    let Some(form_id) = query.form_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "formId query parameter is required",
            None,
        );
    };
    let token = headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or(query.token);

    let url = format!("{}/{form_id}", state.config.upstream_url.trim_end_matches('/'));
    let mut request = state.client.get(&url);
    if let Some(token) = &token {
        request = request.bearer_auth(token);
    }
    let upstream = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Failed to fetch form",
                Some(&err.to_string()),
            );
        }
    };

    let status = upstream.status();
    let body = match upstream.text().await {
        Ok(body) => body,
        Err(err) => {
            return error_response(
                StatusCode::BAD_GATEWAY,
                "Failed to read upstream response",
                Some(&err.to_string()),
            );
        }
    };
    let relayed =
        StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    if relayed.is_success() {
        return json_response(relayed, body);
    }
    error_response(relayed, &format!("Failed to fetch form: {}", status.as_u16()), Some(&body))
}

/// Handles `OPTIONS /typeform-proxy` preflight requests.
async fn handle_preflight() -> Response {
    (StatusCode::NO_CONTENT, CORS_HEADERS).into_response()
}

/// Rejects every method other than `GET` and `OPTIONS`.
async fn handle_method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", None)
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Builds a JSON response with the CORS header set attached.
fn json_response(status: StatusCode, body: String) -> Response {
    (
        status,
        CORS_HEADERS,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// Builds a `{ error, details? }` response with the CORS header set attached.
fn error_response(status: StatusCode, error: &str, details: Option<&str>) -> Response {
    let body = match details {
        Some(details) => json!({ "error": error, "details": details }),
        None => json!({ "error": error }),
    };
    json_response(status, body.to_string())
}
