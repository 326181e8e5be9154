// crates/form-lens-client/src/lib.rs
// ============================================================================
// Module: Form-Lens Client Library
// Description: Public API surface for form retrieval.
// Purpose: Expose the form-ID parser and the proxy-backed form fetcher.
// Dependencies: crate::{fetch, form_id}
// ============================================================================

//! ## Overview
//! The client crate owns everything between user input and a decoded
//! [`form_lens_core::FormDocument`]: extracting a form ID from a raw ID or a
//! shared URL, and fetching the form definition through the relay proxy with
//! a status-to-error mapping that the display layer localizes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod fetch;
pub mod form_id;

#[cfg(test)]
mod tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use fetch::FetchError;
pub use fetch::ProxyClient;
pub use fetch::ProxyClientConfig;
pub use form_id::parse_form_id;
