use crate::signaling::SignalingOutput;
use dashmap::DashMap;
use huddle_core::{ConnectionId, ServerEvent};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Outbound queues of every live connection, keyed by connection id.
///
/// Each socket task owns the receiving half and drains it into the socket, so
/// pushing an event never waits on the network.
#[derive(Clone, Default)]
pub struct ConnectionHub {
    connections: Arc<DashMap<ConnectionId, mpsc::UnboundedSender<ServerEvent>>>,
}

impl ConnectionHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a connection and returns the queue its socket should drain.
    pub fn add_connection(&self, connection_id: ConnectionId) -> mpsc::UnboundedReceiver<ServerEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.insert(connection_id, tx);
        rx
    }

    pub fn remove_connection(&self, connection_id: &ConnectionId) {
        self.connections.remove(connection_id);
    }

    pub fn is_connected(&self, connection_id: &ConnectionId) -> bool {
        self.connections.contains_key(connection_id)
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl SignalingOutput for ConnectionHub {
    fn send(&self, connection_id: &ConnectionId, event: ServerEvent) -> bool {
        let Some(tx) = self.connections.get(connection_id) else {
            debug!(
                "Dropping {} for unknown connection {}",
                event.name(),
                connection_id
            );
            return false;
        };

        let name = event.name();
        if tx.send(event).is_err() {
            warn!("Connection {} closed before {} was delivered", connection_id, name);
            return false;
        }

        true
    }
}
