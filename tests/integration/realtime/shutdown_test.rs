//! Graceful shutdown with open event streams

use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::time::{timeout, Duration};

use boardcast::backend::server::{serve, AppState};
use boardcast::backend::store::MemoryStore;

use crate::common::test_config;

#[tokio::test]
async fn test_shutdown_completes_with_open_event_stream() {
    let state = AppState::new(
        test_config().build().unwrap(),
        Arc::new(MemoryStore::new()),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve(listener, state, async move {
        let _ = stop_rx.await;
    }));

    let mut client = TcpStream::connect(addr).await.unwrap();
    client
        .write_all(b"GET /api/events HTTP/1.1\r\nHost: localhost\r\nAccept: text/event-stream\r\n\r\n")
        .await
        .unwrap();

    let mut head = [0u8; 64];
    let read = timeout(Duration::from_secs(5), client.read(&mut head))
        .await
        .expect("response head within timeout")
        .unwrap();
    assert!(String::from_utf8_lossy(&head[..read]).starts_with("HTTP/1.1 200 OK"));

    stop_tx.send(()).unwrap();

    let finished = timeout(Duration::from_secs(5), server).await;
    assert!(
        matches!(finished, Ok(Ok(Ok(())))),
        "server did not stop: {:?}",
        finished
    );
}
