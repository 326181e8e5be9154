// crates/form-lens-proxy/src/lib.rs
// ============================================================================
// Module: Form-Lens Proxy Library
// Description: Public API surface for the relay proxy.
// Purpose: Expose the relay router so the binary and tests share one wiring.
// Dependencies: crate::relay
// ============================================================================

//! ## Overview
//! The proxy relays authenticated form-definition GETs to the Typeform API
//! and attaches the CORS headers browser clients need. The router is built
//! here; the binary in `main.rs` only parses arguments and serves it.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod relay;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use relay::RelayConfig;
pub use relay::RelayError;
pub use relay::RelayState;
pub use relay::build_router;
