//! End-to-end tests: service call → transport → normalizer → notification.

use std::sync::Arc;

use contacts_client::contacts::{Contact, ContactFields, ContactService};
use contacts_client::http::{ResponseNormalizer, TransportClient};
use contacts_client::notify::{NotificationStore, Severity, StoreNotifier};
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn wire_up(server: &MockServer) -> (ContactService, Arc<NotificationStore>) {
    let store = Arc::new(NotificationStore::new());
    let transport = TransportClient::new(Url::parse(&server.uri()).unwrap()).unwrap();
    let normalizer = ResponseNormalizer::new(Arc::new(StoreNotifier::new(store.clone())));
    (ContactService::new(transport, normalizer), store)
}

fn sample_fields() -> ContactFields {
    ContactFields {
        name: "A".to_owned(),
        phone: "555-0100".to_owned(),
        email: "a@example.com".to_owned(),
        address: "1 First St".to_owned(),
    }
}

#[tokio::test]
async fn create_contact_fulfills_and_notifies_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(body_json(json!({
            "name": "A",
            "phone": "555-0100",
            "email": "a@example.com",
            "address": "1 First St",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "Contact created",
            "data": {"id": 42, "name": "A"},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (service, store) = wire_up(&server);
    let response = service.create_contact(&sample_fields()).await.unwrap();

    assert_eq!(response.code, 0);
    assert_eq!(response.msg, "Contact created");
    assert_eq!(response.data, Some(json!({"id": 42, "name": "A"})));

    let state = store.snapshot();
    assert!(state.visible);
    assert_eq!(state.severity, Severity::Success);
    assert_eq!(state.message, "Contact created");
    assert_eq!(state.duration_ms, 3_000);
}

#[tokio::test]
async fn search_error_with_empty_message_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/search"))
        .and(query_param("q", "smith"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 3,
            "msg": "",
            "data": null,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (service, store) = wire_up(&server);
    let error = service.search_contacts("smith").await.unwrap_err();

    assert_eq!(error.code, 3);
    assert_eq!(error.msg, "");
    assert_eq!(error.data, None);

    let state = store.snapshot();
    assert!(state.visible);
    assert_eq!(state.severity, Severity::Error);
    assert_eq!(state.message, "An error occurred");
    assert_eq!(state.duration_ms, 4_000);
}

#[tokio::test]
async fn unreachable_backend_yields_network_error_and_notification() {
    let store = Arc::new(NotificationStore::new());
    // Nothing listens on this port.
    let transport = TransportClient::new(Url::parse("http://127.0.0.1:9").unwrap()).unwrap();
    let normalizer = ResponseNormalizer::new(Arc::new(StoreNotifier::new(store.clone())));
    let service = ContactService::new(transport, normalizer);

    let error = service.get_contacts().await.unwrap_err();

    assert_eq!(error.code, -1);
    assert!(!error.msg.is_empty());
    assert_eq!(error.data, None);

    let state = store.snapshot();
    assert!(state.visible);
    assert_eq!(state.severity, Severity::Error);
    assert_eq!(state.message, error.msg);
}

#[tokio::test]
async fn quiet_success_leaves_the_slot_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": [],
        })))
        .mount(&server)
        .await;

    let (service, store) = wire_up(&server);
    let response = service.get_contacts().await.unwrap();

    assert_eq!(response.data, Some(json!([])));
    assert!(!store.snapshot().visible);
}

#[tokio::test]
async fn contact_payload_deserializes_into_model() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contacts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "",
            "data": {
                "id": 7,
                "name": "Ada Lovelace",
                "phone": "555-0100",
                "email": "ada@example.com",
                "address": "12 Analytical Row",
            },
        })))
        .mount(&server)
        .await;

    let (service, _store) = wire_up(&server);
    let response = service.get_contact(7).await.unwrap();
    let contact: Contact = response.data_as().unwrap().unwrap();

    assert_eq!(contact.id, 7);
    assert_eq!(contact.name, "Ada Lovelace");
    assert_eq!(contact.email, "ada@example.com");
}

#[tokio::test]
async fn later_outcome_supersedes_earlier_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "msg": "Contact created",
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/contacts/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 21,
            "msg": "Contact is read-only",
        })))
        .mount(&server)
        .await;

    let (service, store) = wire_up(&server);
    service.create_contact(&sample_fields()).await.unwrap();
    service.delete_contact(7).await.unwrap_err();

    // Latest-wins: the error fully overwrites the success notification.
    let state = store.snapshot();
    assert_eq!(state.severity, Severity::Error);
    assert_eq!(state.message, "Contact is read-only");
    assert_eq!(state.duration_ms, 4_000);
}
