// crates/form-lens-proxy/src/main.rs
// ============================================================================
// Module: Relay Proxy Binary
// Description: Command-line entry point for the Form-Lens relay proxy.
// Purpose: Parse arguments and serve the relay router.
// Dependencies: clap, form-lens-proxy, tokio
// ============================================================================

//! ## Overview
//! Thin binary around [`form_lens_proxy::build_router`]: parses the listen
//! address and upstream settings, binds the listener, and serves until the
//! process is stopped.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use form_lens_proxy::RelayConfig;
use form_lens_proxy::RelayError;
use form_lens_proxy::RelayState;
use form_lens_proxy::build_router;

// ============================================================================
// SECTION: Arguments
// ============================================================================

/// Relay proxy for form-definition requests.
#[derive(Debug, Parser)]
#[command(name = "form-lens-proxy", version, about = "CORS relay for Typeform form definitions")]
struct ProxyArgs {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8787")]
    listen: SocketAddr,
    /// Upstream endpoint; the form ID is appended as a path segment.
    #[arg(long, default_value = "https://api.typeform.com/forms")]
    upstream: String,
    /// Upstream request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Parses arguments and serves the relay.
#[tokio::main]
async fn main() -> ExitCode {
    let args = ProxyArgs::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            write_stderr_line(&format!("error: {err}"));
            ExitCode::FAILURE
        }
    }
}

/// Builds the relay state and serves it on the configured address.
async fn run(args: ProxyArgs) -> Result<(), RelayError> {
    let config = RelayConfig {
        upstream_url: args.upstream,
        timeout: Duration::from_secs(args.timeout_secs),
    };
    let state = Arc::new(RelayState::new(config)?);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .map_err(|err| RelayError::Bind(err.to_string()))?;
    write_stderr_line(&format!("listening on {}", args.listen));
    axum::serve(listener, app).await.map_err(|err| RelayError::Serve(err.to_string()))
}

/// Writes a line to stderr, ignoring I/O failures on a closed stream.
fn write_stderr_line(message: &str) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "{message}");
}
