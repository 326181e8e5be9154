// crates/form-lens-client/tests/proxy_fetch.rs
// ============================================================================
// Module: Proxy Fetch Integration Tests
// Description: End-to-end fetch tests against a local stub proxy.
// Purpose: Verify status mapping, token forwarding, and body decoding.
// Dependencies: form-lens-client, tiny_http
// ============================================================================

//! ## Overview
//! Runs the blocking fetcher against a single-shot `tiny_http` stub and
//! checks the wire contract: the `formId` query parameter, the token header,
//! and the documented status-to-error mapping.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use form_lens_client::FetchError;
use form_lens_client::ProxyClient;
use form_lens_client::ProxyClientConfig;
use tiny_http::Response;
use tiny_http::Server;

// ============================================================================
// SECTION: Stub Proxy
// ============================================================================

/// What the stub observed about the one request it served.
struct ObservedRequest {
    /// Request path and query string.
    url: String,
    /// Value of the `x-typeform-token` header, when present.
    token_header: Option<String>,
}

/// Serves exactly one request with the given status and body, then reports
/// what it observed.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<ObservedRequest>) {
    let server = Server::http("127.0.0.1:0").expect("bind stub proxy");
    let addr = format!(
        "http://{}/typeform-proxy",
        server.server_addr().to_ip().expect("stub proxy addr")
    );
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let request = server.recv().expect("receive request");
        let token_header = request
            .headers()
            .iter()
            .find(|header| header.field.equiv("x-typeform-token"))
            .map(|header| header.value.as_str().to_string());
        let observed = ObservedRequest {
            url: request.url().to_string(),
            token_header,
        };
        let response = Response::from_string(body).with_status_code(status);
        request.respond(response).expect("respond");
        sender.send(observed).expect("report observation");
    });
    (addr, receiver)
}

/// Builds a client pointed at the stub with a short timeout.
fn client_for(addr: String) -> ProxyClient {
    ProxyClient::with_config(ProxyClientConfig {
        proxy_url: addr,
        timeout: Duration::from_secs(5),
        ..ProxyClientConfig::default()
    })
    .expect("build client")
}

// ============================================================================
// SECTION: Success Tests
// ============================================================================

#[test]
fn successful_fetch_decodes_the_document() {
    let (addr, observed) =
        serve_once(200, r#"{ "id": "Gjl34w73", "title": "Stub Form", "fields": [], "logic": [] }"#);
    let client = client_for(addr);

    let document = client.fetch_form("Gjl34w73", None).expect("fetch form");
    assert_eq!(document.id, "Gjl34w73");
    assert_eq!(document.title, "Stub Form");

    let request = observed.recv().expect("observed request");
    assert!(request.url.contains("formId=Gjl34w73"), "url was {}", request.url);
    assert_eq!(request.token_header, None);
}

#[test]
fn token_is_forwarded_as_a_header() {
    let (addr, observed) = serve_once(200, r#"{ "id": "x", "title": "Tokened" }"#);
    let client = client_for(addr);

    client.fetch_form("x", Some("tf-token-123")).expect("fetch form");

    let request = observed.recv().expect("observed request");
    assert_eq!(request.token_header.as_deref(), Some("tf-token-123"));
}

#[test]
fn unparseable_success_body_is_a_remote_error() {
    let (addr, _observed) = serve_once(200, "<html>not json</html>");
    let client = client_for(addr);

    let error = client.fetch_form("x", None).expect_err("expected decode failure");
    assert!(matches!(error, FetchError::Remote { status: 200, .. }), "got {error:?}");
}

// ============================================================================
// SECTION: Status Mapping Tests
// ============================================================================

#[test]
fn status_401_maps_to_auth_required() {
    let (addr, _observed) = serve_once(401, r#"{ "error": "Unauthorized" }"#);
    let error = client_for(addr).fetch_form("x", None).expect_err("expected 401 mapping");
    assert_eq!(error, FetchError::AuthRequired);
}

#[test]
fn status_403_maps_to_access_forbidden() {
    let (addr, _observed) = serve_once(403, r#"{ "error": "Forbidden" }"#);
    let error = client_for(addr).fetch_form("x", None).expect_err("expected 403 mapping");
    assert_eq!(error, FetchError::AccessForbidden);
}

#[test]
fn status_404_maps_to_form_not_found_regardless_of_body() {
    let (addr, _observed) = serve_once(404, "anything at all");
    let error = client_for(addr).fetch_form("x", None).expect_err("expected 404 mapping");
    assert_eq!(error, FetchError::FormNotFound);
}

#[test]
fn other_statuses_map_to_remote_error_with_detail() {
    let (addr, _observed) =
        serve_once(502, r#"{ "error": "Failed to fetch form", "details": "upstream timeout" }"#);
    let error = client_for(addr).fetch_form("x", None).expect_err("expected 502 mapping");
    let FetchError::Remote { status, detail } = error else {
        panic!("expected remote error, got {error:?}");
    };
    assert_eq!(status, 502);
    assert_eq!(detail, "Failed to fetch form: upstream timeout");
}

#[test]
fn transport_failure_maps_to_network_error() {
    // Bind then drop a listener so the port is very likely closed.
    let closed_addr = {
        let server = Server::http("127.0.0.1:0").expect("bind probe");
        format!("http://{}/typeform-proxy", server.server_addr().to_ip().expect("probe addr"))
    };
    let client = client_for(closed_addr);
    let error = client.fetch_form("x", None).expect_err("expected transport failure");
    assert!(matches!(error, FetchError::Network(_)), "got {error:?}");
}
