mod connection;
mod member;
mod room;
mod signaling;

pub use connection::{ConnectionId, ConnectionIdError};
pub use member::{DEFAULT_DISPLAY_NAME, Member};
pub use room::RoomId;
pub use signaling::{ClientMessage, ProtocolError, ServerEvent, SignalPayload};
