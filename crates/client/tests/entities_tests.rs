//! Entity object endpoint tests.
//!
//! This module tests the entity object API against a mock server:
//! - Listing with query parameters on a POST
//! - Fetching, creating, importing, patching, and deleting objects
//!
//! # Invariants
//! - `create` sends the payload unchanged and returns the decoded response
//! - Import wraps the objects with the `delete_others` flag

mod common;

use boardsonfire_client::{EntityObject, ObjectListAllOptions, ObjectListOptions};
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};

#[tokio::test]
async fn test_create_entity_object_end_to_end() {
    let mock_server = MockServer::start().await;
    let payload = json!({"organization_id": "123456", "name": "X"});
    let response = json!({"id": "e-1", "organization_id": "123456", "name": "X"});

    Mock::given(method("POST"))
        .and(path("/api/v5/entities/widget/entityobjects"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client_for(&mock_server)
        .entities()
        .create("widget", &payload)
        .await
        .unwrap();

    assert_eq!(serde_json::to_value(&created).unwrap(), response);
}

#[tokio::test]
async fn test_create_returns_numeric_ids_unchanged() {
    let mock_server = MockServer::start().await;
    let payload = json!({"organization_id": 123456, "name": "X"});
    let response = json!({"id": 77, "name": "X", "organization_id": 123456});

    Mock::given(method("POST"))
        .and(path("/api/v5/entities/widget/entityobjects"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let created = client_for(&mock_server)
        .entities()
        .create("widget", &payload)
        .await
        .unwrap();

    assert_eq!(created.id, Some(ObjectId::from(77u64)));
    assert_eq!(created.organization_id, Some(ObjectId::from(123456u64)));
    assert_eq!(serde_json::to_value(&created).unwrap(), response);
}

#[tokio::test]
async fn test_list_entity_objects_sends_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/entities/widget/entityobjects/list"))
        .and(query_param("page_size", "100"))
        .and(query_param("page", "1"))
        .and(query_param("group", "pumps"))
        .and(query_param("filter", "status = 'open'"))
        .and(query_param("target_organization_ids", "1,2"))
        .and(query_param_is_missing("order"))
        .and(query_param_is_missing("direction"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "e1", "organization_id": "1"},
            {"id": "e2", "organization_id": "2"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let objects = client_for(&mock_server)
        .entities()
        .list(
            "widget",
            ObjectListOptions::new()
                .organizations(["1", "2"])
                .group("pumps")
                .filter("status = 'open'"),
        )
        .await
        .unwrap();

    assert_eq!(objects.len(), 2);
    assert_eq!(objects[1].organization_id, Some(ObjectId::from("2")));
}

#[tokio::test]
async fn test_list_entity_objects_sends_empty_organization_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v5/entities/widget/entityobjects/list"))
        .and(query_param("target_organization_ids", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .entities()
        .list("widget", ObjectListOptions::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_all_entity_objects_with_limit() {
    let mock_server = MockServer::start().await;

    for page in 1..=3 {
        Mock::given(method("POST"))
            .and(path("/api/v5/entities/widget/entityobjects/list"))
            .and(query_param("page", page.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(MockTransport::records((page - 1) * 100, 100)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let objects = client_for(&mock_server)
        .entities()
        .list_all("widget", ObjectListAllOptions::new().limit(250))
        .collect()
        .await
        .unwrap();

    assert_eq!(objects.len(), 250);
    assert_eq!(objects[249].id, Some(ObjectId::from("249")));
}

#[tokio::test]
async fn test_get_entity_object() {
    let mock_server = MockServer::start().await;
    let fixture = load_fixture("entities/get_entity_object.json");

    Mock::given(method("GET"))
        .and(path("/api/v5/entities/widget/entityobjects/e-501"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let object = client_for(&mock_server)
        .entities()
        .get("widget", "e-501")
        .await
        .unwrap();

    assert_eq!(object.organization_id, Some(ObjectId::from("123456")));
    assert_eq!(serde_json::to_value(&object).unwrap(), fixture);
    assert_eq!(object.extra["location"]["site"], json!("Harbor"));
}

#[tokio::test]
async fn test_upsert_entity_objects_wraps_payload() {
    let mock_server = MockServer::start().await;
    let objects = vec![
        EntityObject::new("1").with_field("name", "A"),
        EntityObject::new("2").with_field("name", "B"),
    ];

    Mock::given(method("POST"))
        .and(path("/api/v5/entities/widget/entityobjects/import"))
        .and(body_json(json!({
            "entity_objects": [
                {"organization_id": "1", "name": "A"},
                {"organization_id": "2", "name": "B"}
            ],
            "delete_others": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["e1", "e2"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = client_for(&mock_server)
        .entities()
        .upsert("widget", &objects, true)
        .await
        .unwrap();

    assert_eq!(ids, vec![ObjectId::from("e1"), ObjectId::from("e2")]);
}

#[tokio::test]
async fn test_update_entity_object_uses_patch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/v5/entities/widget/entityobjects/e1"))
        .and(body_json(json!({"name": "Renamed"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "e1", "organization_id": "1", "name": "Renamed"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = client_for(&mock_server)
        .entities()
        .update("widget", "e1", &json!({"name": "Renamed"}))
        .await
        .unwrap();
    assert_eq!(updated.extra.get("name"), Some(&json!("Renamed")));
}

#[tokio::test]
async fn test_delete_entity_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v5/entities/widget/entityobjects/e1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server)
        .entities()
        .delete("widget", "e1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_missing_entity_object() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v5/entities/widget/entityobjects/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .entities()
        .delete("widget", "gone")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
