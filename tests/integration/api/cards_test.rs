//! Card endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::TestApp;
use crate::{assert_no_event, assert_status};

#[tokio::test]
async fn test_create_card_surfaces_list_id() {
    let app = TestApp::new();
    let list = app.post("/api/lists", json!({"name": "Todo"})).await;
    let list_id = list.body["id"].clone();
    let mut events = app.subscribe();

    let card = app
        .post("/api/cards", json!({"list_id": list_id, "title": "Write tests"}))
        .await;
    assert_status!(card, StatusCode::OK);

    let event = serde_json::to_value(events.recv().await.unwrap()).unwrap();
    assert_eq!(event["type"], "[CARDS] CREATE");
    assert_eq!(event["payload"]["card"], card.body);
    assert_eq!(event["payload"]["listId"], list_id);
}

#[tokio::test]
async fn test_card_without_list_omits_list_id() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    app.post("/api/cards", json!({"title": "Loose"})).await;

    let event = serde_json::to_value(events.recv().await.unwrap()).unwrap();
    assert!(event["payload"].get("listId").is_none());
}

#[tokio::test]
async fn test_card_with_null_list_id_keeps_it() {
    let app = TestApp::new();
    let mut events = app.subscribe();

    let card = app
        .post("/api/cards", json!({"list_id": null, "title": "t"}))
        .await;
    assert_status!(card, StatusCode::OK);
    assert_eq!(card.body["list_id"], json!(null));
    assert!(card.body.as_object().unwrap().contains_key("list_id"));

    let event = serde_json::to_value(events.recv().await.unwrap()).unwrap();
    assert_eq!(event["payload"]["card"], card.body);
    assert_eq!(event["payload"].get("listId"), Some(&json!(null)));

    let id = card.body["id"].as_str().unwrap();
    let fetched = app.get(&format!("/api/cards/{}", id)).await;
    assert_eq!(fetched.body, card.body);
}

#[tokio::test]
async fn test_card_may_reference_missing_list() {
    let app = TestApp::new();
    let card = app
        .post("/api/cards", json!({"list_id": "no-such-list", "title": "Orphan"}))
        .await;
    assert_status!(card, StatusCode::OK);
    assert_eq!(card.body["list_id"], "no-such-list");
}

#[tokio::test]
async fn test_update_card_title() {
    let app = TestApp::new();
    let card = app
        .post("/api/cards", json!({"list_id": "l1", "title": "Bug"}))
        .await;
    let id = card.body["id"].as_str().unwrap().to_string();
    let mut events = app.subscribe();

    let updated = app
        .put(&format!("/api/cards/{}", id), json!({"title": "Fix bug"}))
        .await;
    assert_status!(updated, StatusCode::OK);
    assert_eq!(updated.body["title"], "Fix bug");
    assert_eq!(updated.body["list_id"], "l1");

    assert_eq!(
        serde_json::to_value(events.recv().await.unwrap()).unwrap(),
        json!({
            "type": "[CARDS] UPDATE",
            "payload": {"id": id, "updates": {"title": "Fix bug"}}
        })
    );
}

#[tokio::test]
async fn test_patch_id_is_ignored_but_broadcast_verbatim() {
    let app = TestApp::new();
    let card = app.post("/api/cards", json!({"title": "A"})).await;
    let id = card.body["id"].as_str().unwrap().to_string();
    let mut events = app.subscribe();

    let updated = app
        .put(&format!("/api/cards/{}", id), json!({"id": "other", "title": "B"}))
        .await;
    assert_eq!(updated.body["id"], id.as_str());

    let event = serde_json::to_value(events.recv().await.unwrap()).unwrap();
    assert_eq!(event["payload"]["updates"], json!({"id": "other", "title": "B"}));
}

#[tokio::test]
async fn test_removing_list_keeps_its_cards() {
    let app = TestApp::new();
    let list = app.post("/api/lists", json!({"name": "Todo"})).await;
    let list_id = list.body["id"].as_str().unwrap().to_string();
    let card = app
        .post("/api/cards", json!({"list_id": list_id, "title": "Stay"}))
        .await;

    app.delete(&format!("/api/lists/{}", list_id)).await;

    let id = card.body["id"].as_str().unwrap();
    let fetched = app.get(&format!("/api/cards/{}", id)).await;
    assert_eq!(fetched.body, card.body);
}

#[tokio::test]
async fn test_remove_missing_card() {
    let app = TestApp::new();
    let mut events = app.subscribe();
    let response = app.delete("/api/cards/nope").await;
    assert_status!(response, StatusCode::NOT_FOUND);
    assert_no_event!(events);
}
