use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};

/// Display name used when a client joins without one.
pub const DEFAULT_DISPLAY_NAME: &str = "Anonymous";

/// One connection's participation in a room.
///
/// `name` is opaque application data; routing only ever looks at `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: ConnectionId,
    pub name: String,
}

impl Member {
    pub fn new(id: ConnectionId, name: Option<String>) -> Self {
        let name = name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_owned());

        Self { id, name }
    }
}
