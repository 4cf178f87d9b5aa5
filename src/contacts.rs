//! Contact service: thin pass-throughs over the transport + normalizer.
//!
//! Each method issues one request and returns the normalizer's
//! [`ApiResult`] unchanged. No local error handling happens here; an
//! [`ApiError`](crate::http::ApiError) propagates to whatever awaits the
//! call, and user feedback has already been dispatched by the normalizer.

use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::ClientConfig;
use crate::http::{ApiResult, ResponseNormalizer, TransportClient, TransportError};
use crate::notify::Notifier;

/// A stored contact as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Contact fields for create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Handles all backend interactions for contact management.
pub struct ContactService {
    transport: TransportClient,
    normalizer: ResponseNormalizer,
}

impl ContactService {
    pub fn new(transport: TransportClient, normalizer: ResponseNormalizer) -> Self {
        Self { transport, normalizer }
    }

    /// Builds the service from resolved configuration and a notifier.
    pub fn from_config(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> Result<Self, TransportError> {
        let transport = TransportClient::new(config.base_url.clone())?;
        Ok(Self::new(transport, ResponseNormalizer::new(notifier)))
    }

    /// Fetches all contacts.
    pub async fn get_contacts(&self) -> ApiResult {
        let outcome = self.transport.request(Method::GET, "/contacts", None, None).await;
        self.normalizer.normalize(outcome)
    }

    /// Fetches a single contact by ID.
    pub async fn get_contact(&self, id: i64) -> ApiResult {
        let outcome = self
            .transport
            .request(Method::GET, &format!("/contacts/{id}"), None, None)
            .await;
        self.normalizer.normalize(outcome)
    }

    /// Creates a new contact.
    pub async fn create_contact(&self, fields: &ContactFields) -> ApiResult {
        let body = json!({
            "name": fields.name,
            "phone": fields.phone,
            "email": fields.email,
            "address": fields.address,
        });
        let outcome = self
            .transport
            .request(Method::POST, "/contacts", Some(&body), None)
            .await;
        self.normalizer.normalize(outcome)
    }

    /// Updates an existing contact.
    pub async fn update_contact(&self, id: i64, fields: &ContactFields) -> ApiResult {
        let body = json!({
            "name": fields.name,
            "phone": fields.phone,
            "email": fields.email,
            "address": fields.address,
        });
        let outcome = self
            .transport
            .request(Method::PUT, &format!("/contacts/{id}"), Some(&body), None)
            .await;
        self.normalizer.normalize(outcome)
    }

    /// Deletes a contact by ID.
    pub async fn delete_contact(&self, id: i64) -> ApiResult {
        let outcome = self
            .transport
            .request(Method::DELETE, &format!("/contacts/{id}"), None, None)
            .await;
        self.normalizer.normalize(outcome)
    }

    /// Searches contacts; the query travels as the `q` query parameter,
    /// never as a path segment.
    pub async fn search_contacts(&self, query: &str) -> ApiResult {
        let outcome = self
            .transport
            .request(Method::GET, "/contacts/search", None, Some(&[("q", query)]))
            .await;
        self.normalizer.normalize(outcome)
    }
}
