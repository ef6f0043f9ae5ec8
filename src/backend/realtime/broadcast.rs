/**
 * Change Broadcasting
 *
 * Fans committed change events out to every live subscriber through a
 * `tokio::sync::broadcast` channel.
 *
 * # Delivery
 *
 * - Publishing never blocks and never waits for subscribers
 * - A subscriber sees only events published after it subscribed
 * - Events from one publisher arrive in publish order
 * - A subscriber that falls more than `capacity` events behind skips the
 *   oldest ones; nothing is replayed
 * - `close` ends every open subscription stream, so graceful shutdown is
 *   not held up by idle SSE clients
 */

use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use crate::shared::ChangeEvent;

/// Broadcast channel for change events
///
/// Cloning is cheap and every clone publishes into the same channel.
///
/// # Example
///
/// ```rust
/// use boardcast::backend::realtime::ChangeBroadcast;
/// use boardcast::shared::ChangeEvent;
///
/// let broadcast = ChangeBroadcast::new(16);
/// let mut rx = broadcast.subscribe();
/// broadcast.publish(ChangeEvent::ListRemoved("1".to_string()));
/// assert!(rx.try_recv().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ChangeBroadcast {
    sender: broadcast::Sender<ChangeEvent>,
    closed: Arc<watch::Sender<bool>>,
}

impl ChangeBroadcast {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        let (closed, _) = watch::channel(false);
        Self {
            sender,
            closed: Arc::new(closed),
        }
    }

    /// Publish an event to all current subscribers
    ///
    /// Returns the number of subscribers the event was queued for (0 when
    /// nobody is listening, which is not an error).
    pub fn publish(&self, event: ChangeEvent) -> usize {
        let kind = event.kind();
        match self.sender.send(event) {
            Ok(subscriber_count) => {
                tracing::info!("[Realtime] {} broadcast to {} subscribers", kind, subscriber_count);
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("[Realtime] No subscribers to receive {}", kind);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Signal every subscription stream to finish
    ///
    /// Publishing still works afterwards; streams opened after the close end
    /// immediately.
    pub fn close(&self) {
        self.closed.send_replace(true);
        tracing::info!("[Realtime] Closing subscription streams");
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }

    /// Receiver that flips to `true` once [`close`](Self::close) is called
    pub fn closed_signal(&self) -> watch::Receiver<bool> {
        self.closed.subscribe()
    }
}
