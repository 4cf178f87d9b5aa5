//! Canonical result types for normalized backend responses.
//!
//! The backend wraps every response body in an envelope `{code, msg, data?}`
//! with `code == 0` as the only success code. The normalizer turns that
//! untrusted wire shape into an [`ApiResult`]: the `Ok` arm carries
//! [`ApiResponse`] (produced iff `code == 0`), the `Err` arm carries
//! [`ApiError`] with the backend's error code forwarded verbatim.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reserved code for outcomes with no application code: transport failures
/// (no response obtained) and malformed envelopes.
pub const TRANSPORT_FAILURE_CODE: i64 = -1;

/// Canonical fulfilled outcome of a backend call.
///
/// Invariant: only produced for envelopes with `code == 0`. `msg` is always
/// present; a backend that omitted it yields an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// The envelope code, always `0` on this arm.
    pub code: i64,

    /// Backend-provided feedback message, possibly empty.
    pub msg: String,

    /// The `data` payload, if the backend attached one.
    pub data: Option<Value>,
}

impl ApiResponse {
    /// Deserializes the `data` payload into a typed model.
    ///
    /// Returns `Ok(None)` when the response carried no payload.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        self.data.clone().map(serde_json::from_value).transpose()
    }
}

/// Canonical rejected outcome of a backend call.
///
/// Carries the backend's application error code verbatim, or
/// [`TRANSPORT_FAILURE_CODE`] when no code was obtained. `msg` mirrors the
/// envelope's message and may be empty; user-facing fallbacks are applied at
/// notification time, not here.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("Backend error {code}: {msg}")]
pub struct ApiError {
    /// Application error code, or `-1` for transport-level failures.
    pub code: i64,

    /// Backend-provided error message, possibly empty.
    pub msg: String,

    /// The `data` payload, if the backend attached one.
    pub data: Option<Value>,
}

/// Outcome of every normalized backend call.
///
/// The arm encodes the `success` bit: `Ok` iff the envelope code was `0`.
pub type ApiResult = Result<ApiResponse, ApiError>;

/// Fields extracted defensively from an untrusted response body.
///
/// Every field is optional: the body may not be JSON at all, may not be an
/// object, or may carry the wrong type in any position. Extraction never
/// fails; absent or mistyped fields are simply `None`.
#[derive(Debug, Default)]
pub(crate) struct Envelope {
    pub code: Option<i64>,
    pub msg: Option<String>,
    pub data: Option<Value>,
}

impl Envelope {
    /// Extracts whatever envelope fields are present in `body`.
    ///
    /// A JSON `null` in `data` is treated the same as an absent field.
    pub(crate) fn from_body(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        let Some(object) = value.as_object() else {
            return Self::default();
        };

        Self {
            code: object.get("code").and_then(Value::as_i64),
            msg: object.get("msg").and_then(Value::as_str).map(str::to_owned),
            data: object.get("data").cloned().filter(|data| !data.is_null()),
        }
    }
}
