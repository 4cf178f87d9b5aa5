//! Client-side communication layer for the contacts application.
//!
//! This crate issues HTTP requests against the contacts backend, normalizes
//! the backend's `{code, msg, data}` response envelope into a canonical
//! [`ApiResult`](http::ApiResult), and drives a transient notification slot
//! from every outcome.
//!
//! # Wiring
//!
//! The host application owns a single [`NotificationStore`](notify::NotificationStore)
//! and injects it into the normalizer through a [`Notifier`](notify::Notifier):
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use contacts_client::config::load_configuration;
//! use contacts_client::contacts::ContactService;
//! use contacts_client::notify::{NotificationStore, StoreNotifier};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let store = Arc::new(NotificationStore::new());
//! let config = load_configuration()?;
//! let notifier = Arc::new(StoreNotifier::new(store.clone()));
//! let service = ContactService::from_config(&config, notifier)?;
//!
//! let result = service.get_contacts().await?;
//! println!("fetched: {:?}", result.data);
//! // The store now holds whatever feedback the backend attached.
//! println!("notification: {:?}", store.snapshot());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod contacts;
pub mod http;
pub mod notify;

pub use crate::config::ClientConfig;
pub use crate::contacts::{Contact, ContactFields, ContactService};
pub use crate::http::{
    ApiError, ApiResponse, ApiResult, RawOutcome, ResponseNormalizer, TransportClient, TransportError,
};
pub use crate::notify::{NotificationState, NotificationStore, Notifier, NoopNotifier, Severity, StoreNotifier};
