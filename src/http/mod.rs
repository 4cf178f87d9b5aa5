//! HTTP client module for contacts backend communication.
//!
//! This module provides the transport and normalization layers sitting
//! between the domain services and the backend's REST API. Every backend
//! response body is expected to be a JSON envelope of the form
//! `{code, msg, data?}`, where `code == 0` is the only success code.
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`TransportClient`] - Configured request executor (base URL, fixed
//!   timeout, JSON default headers) producing a [`RawOutcome`]
//! - [`ResponseNormalizer`] - Maps every [`RawOutcome`] to an [`ApiResult`]
//!   and dispatches user feedback as a best-effort side effect
//! - [`ApiResponse`] / [`ApiError`] - The canonical normalized outcome
//!   returned to every caller
//! - [`TransportError`] - Setup-time errors of the HTTP layer
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use contacts_client::http::{ResponseNormalizer, TransportClient};
//! use contacts_client::notify::NoopNotifier;
//! use reqwest::Method;
//! use url::Url;
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let transport = TransportClient::new(Url::parse("http://localhost:3000/api")?)?;
//! let normalizer = ResponseNormalizer::new(Arc::new(NoopNotifier));
//!
//! let outcome = transport.request(Method::GET, "/contacts", None, None).await;
//! let contacts = normalizer.normalize(outcome)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! The normalizer never panics on malformed input: a response whose body is
//! not a parseable envelope, and a request that never produced a response,
//! both become an [`ApiError`] with the reserved code `-1`. Backend error
//! codes (`code != 0`) are forwarded verbatim.

mod error;
mod normalizer;
mod transport;
mod types;

pub use error::TransportError;
pub use normalizer::ResponseNormalizer;
pub use transport::{RawOutcome, TransportClient};
pub use types::{ApiError, ApiResponse, ApiResult, TRANSPORT_FAILURE_CODE};
