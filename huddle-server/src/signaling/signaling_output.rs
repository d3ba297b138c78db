use huddle_core::{ConnectionId, ServerEvent};

/// Outbound side of the transport, as seen by the router.
///
/// Implementations must not block: the router calls `send` while holding a
/// room's lock. Returns whether the event was handed to a live connection;
/// events for unknown connections are dropped.
pub trait SignalingOutput: Send + Sync {
    fn send(&self, connection_id: &ConnectionId, event: ServerEvent) -> bool;
}
