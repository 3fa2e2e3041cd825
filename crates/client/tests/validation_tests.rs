//! Write validation tests.
//!
//! This module tests that `create` and `upsert` reject incomplete payloads
//! before anything is sent, and let complete payloads through.
//!
//! # Invariants
//! - A validation failure never reaches the transport

mod common;

use boardsonfire_client::{DataObject, DataSources, Entities, EntityObject};
use common::*;
use serde::Serialize;
use serde_json::json;

#[tokio::test]
async fn test_entity_create_without_organization_sends_nothing() {
    let transport = MockTransport::new();

    let err = Entities::new(&transport)
        .create("widget", &json!({"name": "X"}))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_entity_upsert_requires_list() {
    let transport = MockTransport::new();

    let err = Entities::new(&transport)
        .upsert("widget", &json!({"organization_id": "1"}), false)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Validation failed: Data must be a list of dictionaries"
    );
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_entity_upsert_rejects_any_incomplete_element() {
    let transport = MockTransport::new();

    let err = Entities::new(&transport)
        .upsert(
            "widget",
            &json!([{"organization_id": "1"}, {"name": "orphan"}]),
            true,
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_datasource_create_requires_timestamp() {
    let transport = MockTransport::new();

    let err = DataSources::new(&transport)
        .create("kpi", &json!({"organization_id": "1", "value": 3}))
        .await
        .unwrap_err();

    match err {
        ClientError::Validation(msg) => assert_eq!(
            msg,
            "organization_id and timestamp is required to create a datasource object"
        ),
        other => panic!("Expected Validation, got {other:?}"),
    }
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_datasource_upsert_typed_rows_pass() {
    let transport = MockTransport::new();
    transport.push_payload(json!(["1", 2]));

    let rows = vec![
        DataObject::new("1", "2024-05-01").with_field("value", 3),
        DataObject::new("1", "2024-05-02").with_field("value", 4),
    ];
    let ids = DataSources::new(&transport).upsert("kpi", &rows).await.unwrap();

    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], ObjectId::from("1"));
    assert_eq!(ids[1], ObjectId::from(2u64));
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn test_complete_payload_with_extra_keys_is_sent() {
    #[derive(Serialize)]
    struct Widget<'a> {
        organization_id: &'a str,
        name: &'a str,
        color: &'a str,
    }

    let transport = MockTransport::new();
    transport.push_payload(json!({"id": "e1", "organization_id": "9", "name": "Pump"}));

    let created = Entities::new(&transport)
        .create(
            "widget",
            &Widget {
                organization_id: "9",
                name: "Pump",
                color: "red",
            },
        )
        .await
        .unwrap();

    assert_eq!(created.id, Some(ObjectId::from("e1")));
    assert_eq!(
        transport.requests()[0].body,
        Some(json!({"organization_id": "9", "name": "Pump", "color": "red"}))
    );
}

#[tokio::test]
async fn test_update_is_not_validated() {
    let transport = MockTransport::new();
    transport.push_payload(json!({"id": "e1", "name": "Renamed"}));

    let updated: EntityObject = Entities::new(&transport)
        .update("widget", "e1", &json!({"name": "Renamed"}))
        .await
        .unwrap();

    assert_eq!(updated.extra.get("name"), Some(&json!("Renamed")));
    assert_eq!(transport.call_count(), 1);
}
