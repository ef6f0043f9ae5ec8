//! Server-Sent Events endpoint tests

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use futures_util::StreamExt;
use serde_json::{json, Value};
use tokio::time::{timeout, Duration};

use crate::common::TestApp;

/// Read from an SSE body until one complete `action` event arrives
async fn next_action(body: Body) -> Value {
    let mut stream = body.into_data_stream();
    let mut buffer = String::new();

    loop {
        let chunk = timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("event within timeout")
            .expect("stream still open")
            .expect("readable chunk");
        buffer.push_str(&String::from_utf8_lossy(&chunk));

        if let Some(end) = buffer.find("\n\n") {
            let frame = &buffer[..end];
            assert!(frame.contains("event: action"), "unexpected frame: {}", frame);
            let data = frame
                .lines()
                .find_map(|line| line.strip_prefix("data: "))
                .expect("data line");
            return serde_json::from_str(data).expect("JSON event");
        }
    }
}

#[tokio::test]
async fn test_event_stream_delivers_changes() {
    let app = TestApp::new();

    let response = app
        .raw(Request::get("/api/events").body(Body::empty()).unwrap())
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );

    let created = app.post("/api/lists", json!({"name": "Live"})).await;

    let event = next_action(response.into_body()).await;
    assert_eq!(
        event,
        json!({"type": "[LISTS] CREATE", "payload": {"list": created.body}})
    );
}

#[tokio::test]
async fn test_event_stream_rejects_bad_token() {
    let app = TestApp::new();
    let response = app
        .raw(
            Request::get("/api/events")
                .header("x-access-token", "bogus")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
