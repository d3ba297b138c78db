use huddle_core::ConnectionId;
use thiserror::Error;

/// Reasons a connection is not admitted to signaling. Never sent on the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignalingError {
    #[error("connection did not name a room")]
    MissingRoom,

    #[error("connection {0} has already joined a room")]
    AlreadyJoined(ConnectionId),
}
