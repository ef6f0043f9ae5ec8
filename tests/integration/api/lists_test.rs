//! List endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use boardcast::shared::ChangeEvent;

use crate::common::TestApp;
use crate::{assert_no_event, assert_status};

#[tokio::test]
async fn test_create_list_broadcasts_stored_record() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    let response = app.post("/api/lists", json!({"name": "Backlog"})).await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body["name"], "Backlog");
    let id = response.body["id"].as_str().unwrap().to_string();

    let event = serde_json::to_value(events.recv().await.unwrap()).unwrap();
    assert_eq!(
        event,
        json!({
            "type": "[LISTS] CREATE",
            "payload": {"list": {"id": id, "name": "Backlog"}}
        })
    );
}

#[tokio::test]
async fn test_client_supplied_id_is_replaced() {
    let app = TestApp::new();
    let response = app.post("/api/lists", json!({"id": "mine", "name": "x"})).await;
    assert_status!(response, StatusCode::OK);
    assert_ne!(response.body["id"], "mine");
}

#[tokio::test]
async fn test_list_and_get() {
    let app = TestApp::new();
    let first = app.post("/api/lists", json!({"name": "One", "position": 1})).await;
    app.post("/api/lists", json!({"name": "Two", "position": 2})).await;

    let all = app.get("/api/lists").await;
    assert_status!(all, StatusCode::OK);
    let names: Vec<_> = all.body.as_array().unwrap().iter().map(|l| l["name"].clone()).collect();
    assert_eq!(names, vec![json!("One"), json!("Two")]);

    let id = first.body["id"].as_str().unwrap();
    let one = app.get(&format!("/api/lists/{}", id)).await;
    assert_status!(one, StatusCode::OK);
    assert_eq!(one.body, first.body);
}

#[tokio::test]
async fn test_get_missing_list_is_null() {
    let app = TestApp::new();
    let response = app.get("/api/lists/does-not-exist").await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body, serde_json::Value::Null);
}

#[tokio::test]
async fn test_update_list_merges_and_broadcasts_patch() {
    let app = TestApp::new();
    let created = app.post("/api/lists", json!({"name": "Doing", "position": 3})).await;
    let id = created.body["id"].as_str().unwrap().to_string();
    let mut events = app.subscribe();

    let response = app
        .put(&format!("/api/lists/{}", id), json!({"name": "In progress"}))
        .await;
    assert_status!(response, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": id, "name": "In progress", "position": 3})
    );

    let event = events.recv().await.unwrap();
    assert_eq!(
        event,
        ChangeEvent::ListUpdated {
            id: id.clone(),
            updates: json!({"name": "In progress"}).as_object().cloned().unwrap(),
        }
    );
    assert_no_event!(events);
}

#[tokio::test]
async fn test_update_missing_list_is_404_without_event() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    let response = app.put("/api/lists/999", json!({"name": "x"})).await;
    assert_status!(response, StatusCode::NOT_FOUND);
    assert_eq!(response.body["status"], 404);
    assert_no_event!(events);
}

#[tokio::test]
async fn test_remove_list_once() {
    let app = TestApp::new();
    let created = app.post("/api/lists", json!({"name": "Done"})).await;
    let id = created.body["id"].as_str().unwrap().to_string();
    let mut events = app.subscribe();

    let first = app.delete(&format!("/api/lists/{}", id)).await;
    assert_status!(first, StatusCode::OK);
    assert_eq!(
        serde_json::to_value(events.recv().await.unwrap()).unwrap(),
        json!({"type": "[LISTS] REMOVE", "payload": id})
    );

    let second = app.delete(&format!("/api/lists/{}", id)).await;
    assert_status!(second, StatusCode::NOT_FOUND);
    assert_no_event!(events);
}

#[tokio::test]
async fn test_delete_unknown_list_is_404_without_event() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    let response = app.delete("/api/lists/999").await;
    assert_status!(response, StatusCode::NOT_FOUND);
    assert_no_event!(events);
}

#[tokio::test]
async fn test_malformed_body_is_500_without_event() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    let request = axum::http::Request::post("/api/lists")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"name\": "))
        .unwrap();
    let response = app.send_request(request).await;

    assert_status!(response, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["status"], 500);
    assert_no_event!(events);
}
