/**
 * Change Event Subscription
 *
 * Server-Sent Events endpoint (`GET {prefix}/events`). Each connected client
 * gets one stream carrying every change event for every board; there is no
 * filtering.
 *
 * # Stream Format
 *
 * ```http
 * HTTP/1.1 200 OK
 * Content-Type: text/event-stream
 *
 * event: action
 * data: {"type":"[LISTS] CREATE","payload":{"list":{"id":"...","name":"Backlog"}}}
 * ```
 *
 * # Connection Management
 *
 * - Keep-alive comments hold idle connections open
 * - Lagged receivers log the skipped count and keep going
 * - Events published while a client was disconnected are not replayed
 * - Streams end once the broadcast is closed at shutdown
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::watch;

use crate::backend::realtime::broadcast::ChangeBroadcast;
use crate::shared::ChangeEvent;

/// SSE event name every change is sent under
pub const EVENT_NAME: &str = "action";

/// Handle an event stream subscription
pub async fn handle_event_subscription(
    State(broadcast): State<ChangeBroadcast>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = broadcast.subscribe();
    tracing::info!(
        "[Realtime] Subscriber connected ({} active)",
        broadcast.subscriber_count()
    );

    Sse::new(change_stream(receiver, broadcast.closed_signal())).keep_alive(KeepAlive::default())
}

/// Turn a broadcast receiver into a stream of SSE events
///
/// The stream ends when the channel closes or `closed` turns `true`.
pub fn change_stream(
    receiver: broadcast::Receiver<ChangeEvent>,
    closed: watch::Receiver<bool>,
) -> impl Stream<Item = Result<Event, axum::Error>> {
    stream::unfold((receiver, closed), |(mut rx, mut closed)| async move {
        loop {
            let received = tokio::select! {
                biased;
                _ = closed.wait_for(|closed| *closed) => {
                    tracing::debug!("[Realtime] Shutdown requested, ending stream");
                    return None;
                }
                received = rx.recv() => received,
            };
            match received {
                Ok(event) => {
                    let data = match serde_json::to_string(&event) {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };
                    let sse_event = Event::default().event(EVENT_NAME).data(data);
                    return Some((Ok(sse_event), (rx, closed)));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[Realtime] Subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::debug!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    })
}
