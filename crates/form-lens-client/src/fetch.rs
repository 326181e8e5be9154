// crates/form-lens-client/src/fetch.rs
// ============================================================================
// Module: Form Fetcher
// Description: Proxy-backed retrieval of form definitions.
// Purpose: Fetch form JSON and map HTTP failures to domain errors.
// Dependencies: form-lens-core, reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! [`ProxyClient`] fetches a form definition through the relay proxy with a
//! blocking GET. Failure statuses map to a fixed error taxonomy; each error
//! knows its catalog key, so user-facing messages stay table-driven and the
//! display layer only resolves keys.
//!
//! ## Invariants
//! - The form ID is validated before any I/O.
//! - Redirects are rejected.
//! - Errors are never retried here; the caller re-triggers the load.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use form_lens_core::FormDocument;
use form_lens_core::LocaleStore;
use form_lens_core::MessageArg;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use reqwest::redirect::Policy;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default relay proxy endpoint.
const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8787/typeform-proxy";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Header carrying the personal access token to the proxy.
const TOKEN_HEADER: &str = "x-typeform-token";

/// Maximum error-body length carried into diagnostics.
const MAX_ERROR_DETAIL_BYTES: usize = 512;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Faults raised while retrieving a form definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The form ID was empty; checked before any request is sent.
    #[error("form id is required")]
    FormIdRequired,
    /// The proxy endpoint URL could not be parsed.
    #[error("invalid proxy url: {0}")]
    InvalidUrl(String),
    /// The upstream answered 401.
    #[error("authentication required")]
    AuthRequired,
    /// The upstream answered 403.
    #[error("access forbidden")]
    AccessForbidden,
    /// The upstream answered 404.
    #[error("form not found")]
    FormNotFound,
    /// The upstream answered another non-success status.
    #[error("remote error (status {status}): {detail}")]
    Remote {
        /// Upstream HTTP status code.
        status: u16,
        /// Upstream error body, truncated for diagnostics.
        detail: String,
    },
    /// No response was obtained at the transport level.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    /// Returns the catalog key of the user-facing message for this error.
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::FormIdRequired => "errors.urlRequired",
            Self::InvalidUrl(_) => "errors.invalidUrl",
            Self::AuthRequired => "errors.authRequired",
            Self::AccessForbidden => "errors.accessForbidden",
            Self::FormNotFound => "errors.formNotFound",
            Self::Remote { .. } => "errors.remoteError",
            Self::Network(_) => "errors.networkError",
        }
    }

    /// Resolves the localized user-facing message for this error.
    #[must_use]
    pub fn localized_message(&self, store: &LocaleStore) -> String {
        match self {
            Self::Remote { status, .. } => store
                .resolve_with(self.message_key(), &[MessageArg::new("status", status.to_string())]),
            _ => store.resolve(self.message_key()),
        }
    }
}

/// Error body shape relayed by the proxy for non-success statuses.
#[derive(Debug, Deserialize)]
struct ProxyErrorBody {
    /// Short error summary.
    error: Option<String>,
    /// Optional upstream detail text.
    details: Option<String>,
}

// ============================================================================
// SECTION: Client Configuration
// ============================================================================

/// Configuration for the proxy-backed form fetcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyClientConfig {
    /// Relay proxy endpoint receiving the `formId` query parameter.
    pub proxy_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// User agent advertised to the proxy.
    pub user_agent: String,
}

impl Default for ProxyClientConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("form-lens/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

// ============================================================================
// SECTION: Proxy Client
// ============================================================================

/// Proxy-backed form fetcher.
///
/// # Invariants
/// - Redirects are rejected.
/// - Each call is independent; the client holds no per-form state.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    /// HTTP client used for fetch requests.
    client: Client,
    /// Endpoint and timeout configuration.
    config: ProxyClientConfig,
}

impl ProxyClient {
    /// Builds a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] when the HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(ProxyClientConfig::default())
    }

    /// Builds a client with a specific configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] when the HTTP client cannot be
    /// constructed.
    pub fn with_config(config: ProxyClientConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;
        Ok(Self {
            client,
            config,
        })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ProxyClientConfig {
        &self.config
    }

    /// Fetches a form definition through the relay proxy.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::FormIdRequired`] for an empty form ID,
    /// [`FetchError::AuthRequired`], [`FetchError::AccessForbidden`], or
    /// [`FetchError::FormNotFound`] for the mapped statuses,
    /// [`FetchError::Remote`] for any other non-success status, and
    /// [`FetchError::Network`] when no response is obtained.
    pub fn fetch_form(
        &self,
        form_id: &str,
        token: Option<&str>,
    ) -> Result<FormDocument, FetchError> {
        if form_id.trim().is_empty() {
            return Err(FetchError::FormIdRequired);
        }
        let mut url = Url::parse(&self.config.proxy_url)
            .map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
        url.query_pairs_mut().append_pair("formId", form_id);

        let mut request = self.client.get(url);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token);
        }
        let response = request.send().map_err(|err| FetchError::Network(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body =
                response.text().map_err(|err| FetchError::Network(err.to_string()))?;
            return serde_json::from_str(&body).map_err(|err| FetchError::Remote {
                status: status.as_u16(),
                detail: format!("response body is not a form document: {err}"),
            });
        }
        Err(match status.as_u16() {
            401 => FetchError::AuthRequired,
            403 => FetchError::AccessForbidden,
            404 => FetchError::FormNotFound,
            other => FetchError::Remote {
                status: other,
                detail: remote_detail(response),
            },
        })
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Extracts a diagnostic detail string from a proxy error response.
///
/// Prefers the proxy's structured `{ error, details }` body and falls back
/// to the truncated raw body text.
fn remote_detail(response: Response) -> String {
    let body = response.text().unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<ProxyErrorBody>(&body) {
        let summary = parsed.error.unwrap_or_default();
        let detail = parsed.details.unwrap_or_default();
        let combined = match (summary.is_empty(), detail.is_empty()) {
            (false, false) => format!("{summary}: {detail}"),
            (false, true) => summary,
            (true, false) => detail,
            (true, true) => String::new(),
        };
        if !combined.is_empty() {
            return truncate_detail(&combined);
        }
    }
    truncate_detail(&body)
}

/// Bounds a detail string on a character boundary.
pub(crate) fn truncate_detail(detail: &str) -> String {
    if detail.len() <= MAX_ERROR_DETAIL_BYTES {
        return detail.to_string();
    }
    let mut end = MAX_ERROR_DETAIL_BYTES;
    while !detail.is_char_boundary(end) {
        end -= 1;
    }
    detail[.. end].to_string()
}
