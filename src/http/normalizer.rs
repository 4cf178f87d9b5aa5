//! Envelope-to-result normalization.
//!
//! Every transport outcome passes through [`ResponseNormalizer::normalize`],
//! the single place where success and error are decided. The mapping is
//! deterministic with respect to its return value; as a side effect it
//! dispatches user feedback through the injected [`Notifier`]. Dispatch is
//! best-effort: a notifier reporting non-delivery never alters the result.

use std::sync::Arc;

use log::debug;

use crate::notify::Notifier;

use super::transport::RawOutcome;
use super::types::{ApiError, ApiResponse, ApiResult, Envelope, TRANSPORT_FAILURE_CODE};

/// Shown when an error envelope carries no message.
const GENERIC_ERROR_MSG: &str = "An error occurred";

/// Shown when a transport failure carries no description.
const NETWORK_ERROR_MSG: &str = "Network error";

/// Maps raw transport outcomes to the canonical [`ApiResult`].
///
/// Classification is envelope-driven only: an envelope `code` of `0`
/// fulfills, any other integer rejects, and outcomes without a parseable
/// integer code (malformed bodies, transport failures) reject with the
/// reserved code `-1`. The HTTP status does not participate.
pub struct ResponseNormalizer {
    notifier: Arc<dyn Notifier>,
}

impl ResponseNormalizer {
    /// Creates a normalizer dispatching feedback through `notifier`.
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Normalizes one raw outcome.
    ///
    /// Never panics on malformed input. On the success path a notification
    /// is dispatched only when the envelope message is non-empty after
    /// trimming; on every error path exactly one error notification is
    /// dispatched, falling back to a generic message when the envelope
    /// carried none.
    pub fn normalize(&self, outcome: RawOutcome) -> ApiResult {
        match outcome {
            RawOutcome::Response { status, body } => {
                let envelope = Envelope::from_body(&body);
                match envelope.code {
                    Some(0) => {
                        let msg = envelope.msg.unwrap_or_default();
                        if !msg.trim().is_empty() {
                            self.dispatch_success(&msg);
                        }
                        Ok(ApiResponse {
                            code: 0,
                            msg,
                            data: envelope.data,
                        })
                    }
                    Some(code) => {
                        debug!(status:% = status, code = code; "Backend reported an error envelope");
                        let msg = envelope.msg.unwrap_or_default();
                        self.dispatch_error(if msg.is_empty() { GENERIC_ERROR_MSG } else { &msg });
                        Err(ApiError {
                            code,
                            msg,
                            data: envelope.data,
                        })
                    }
                    None => {
                        debug!(status:% = status; "Response body carried no parseable envelope code");
                        let msg = envelope.msg.unwrap_or_default();
                        self.dispatch_error(if msg.is_empty() { GENERIC_ERROR_MSG } else { &msg });
                        Err(ApiError {
                            code: TRANSPORT_FAILURE_CODE,
                            msg,
                            data: envelope.data,
                        })
                    }
                }
            }
            RawOutcome::TransportFailure { description } => {
                let msg = if description.is_empty() {
                    NETWORK_ERROR_MSG.to_owned()
                } else {
                    description
                };
                self.dispatch_error(&msg);
                Err(ApiError {
                    code: TRANSPORT_FAILURE_CODE,
                    msg,
                    data: None,
                })
            }
        }
    }

    // Do not fail because of notification failure.
    fn dispatch_success(&self, msg: &str) {
        if !self.notifier.notify_success(msg) {
            debug!("Success notification was not delivered");
        }
    }

    fn dispatch_error(&self, msg: &str) {
        if !self.notifier.notify_error(msg) {
            debug!("Error notification was not delivered");
        }
    }
}
