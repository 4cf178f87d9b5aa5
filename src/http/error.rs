//! Error types for HTTP client setup.
//!
//! Runtime request failures never surface through these types; they are
//! folded into [`RawOutcome::TransportFailure`](super::RawOutcome) and
//! classified by the normalizer. [`TransportError`] only covers failures
//! that occur while configuring the client itself.

use thiserror::Error;

/// Errors that can occur while constructing the HTTP transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The underlying `reqwest` client could not be built.
    ///
    /// This typically indicates a TLS backend initialization failure.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
