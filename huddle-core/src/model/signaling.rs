use crate::model::connection::ConnectionId;
use crate::model::member::Member;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Negotiation data (offer, answer, ICE candidate). Never inspected.
pub type SignalPayload = serde_json::Value;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed frame: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode event: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Frames a client may send after joining.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Relay `data` to the connection `to`.
    Signal { to: ConnectionId, data: SignalPayload },
}

/// Events the relay emits to connections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Members already present when the receiver joined.
    UsersInRoom(Vec<Member>),

    NewUserConnected(Member),

    UserDisconnected {
        #[serde(rename = "userId")]
        user_id: ConnectionId,
    },

    Signal {
        from: ConnectionId,
        data: SignalPayload,
    },
}

impl ClientMessage {
    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::UsersInRoom(_) => "usersInRoom",
            ServerEvent::NewUserConnected(_) => "newUserConnected",
            ServerEvent::UserDisconnected { .. } => "userDisconnected",
            ServerEvent::Signal { .. } => "signal",
        }
    }

    pub fn from_json(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Decode)
    }

    pub fn to_json(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }
}
