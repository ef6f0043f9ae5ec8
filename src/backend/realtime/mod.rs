//! Real-time Update Module
//!
//! Pushes committed list and card changes to connected clients.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - Broadcast channel wrapper
//! └── subscription.rs - SSE subscription handler
//! ```
//!
//! # Delivery Model
//!
//! Fire-and-forget: handlers publish after the store commit and return
//! their response without waiting for delivery. Subscribers that were not
//! connected at publish time never see the event.

/// Event broadcasting
pub mod broadcast;

/// Server-Sent Events subscription handler
pub mod subscription;

// Re-export commonly used types and functions
pub use broadcast::ChangeBroadcast;
pub use subscription::handle_event_subscription;
