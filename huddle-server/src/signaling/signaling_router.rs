use crate::error::SignalingError;
use crate::room::RoomRegistry;
use crate::signaling::SignalingOutput;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use huddle_core::{ConnectionId, Member, RoomId, ServerEvent, SignalPayload};
use std::sync::Arc;
use tracing::{debug, info};

struct RouterInner {
    registry: RoomRegistry,
    /// Room each admitted connection joined; disconnects carry only the id.
    sessions: DashMap<ConnectionId, RoomId>,
    output: Arc<dyn SignalingOutput>,
}

/// Turns connection lifecycle and relay requests into registry updates and
/// outbound events.
#[derive(Clone)]
pub struct SignalingRouter {
    inner: Arc<RouterInner>,
}

impl SignalingRouter {
    pub fn new(output: Arc<dyn SignalingOutput>) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                registry: RoomRegistry::new(),
                sessions: DashMap::new(),
                output,
            }),
        }
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.inner.registry
    }

    /// Room the connection joined, if it was admitted.
    pub fn room_of(&self, connection_id: &ConnectionId) -> Option<RoomId> {
        self.inner
            .sessions
            .get(connection_id)
            .map(|room| room.value().clone())
    }

    /// Admits a connection into `room`.
    ///
    /// The joiner receives `usersInRoom` with the members present before it,
    /// and every other member receives `newUserConnected`, all within the
    /// room's critical section. A rejected connection leaves no state behind
    /// and is sent nothing.
    pub fn connect(
        &self,
        connection_id: ConnectionId,
        room: Option<&str>,
        name: Option<String>,
    ) -> Result<RoomId, SignalingError> {
        let room_id = room.and_then(RoomId::new).ok_or(SignalingError::MissingRoom)?;

        match self.inner.sessions.entry(connection_id) {
            Entry::Occupied(_) => return Err(SignalingError::AlreadyJoined(connection_id)),
            Entry::Vacant(slot) => {
                slot.insert(room_id.clone());
            }
        }

        let member = Member::new(connection_id, name);
        info!(
            "Connection {} ({}) joining room '{}'",
            connection_id, member.name, room_id
        );

        let output = &self.inner.output;
        self.inner
            .registry
            .join(room_id.clone(), member.clone(), |before, after| {
                output.send(&connection_id, ServerEvent::UsersInRoom(before.to_vec()));

                let announcement = ServerEvent::NewUserConnected(member);
                broadcast_except(output.as_ref(), after, &connection_id, &announcement);
            });

        Ok(room_id)
    }

    /// Removes the connection from its room and tells the remaining members.
    /// Returns `false` if the connection was never admitted.
    pub fn disconnect(&self, connection_id: &ConnectionId) -> bool {
        let Some((_, room_id)) = self.inner.sessions.remove(connection_id) else {
            debug!("Ignoring disconnect of unadmitted connection {}", connection_id);
            return false;
        };

        info!("Connection {} leaving room '{}'", connection_id, room_id);

        let output = &self.inner.output;
        self.inner
            .registry
            .leave(&room_id, connection_id, |remaining| {
                let departure = ServerEvent::UserDisconnected {
                    user_id: *connection_id,
                };
                broadcast_except(output.as_ref(), remaining, connection_id, &departure);
            })
            .is_some()
    }

    /// Forwards `data` to `to` as a `signal` event. Sender and target need
    /// not share a room; an unreachable target drops the message.
    pub fn relay(&self, from: ConnectionId, to: ConnectionId, data: SignalPayload) -> bool {
        let delivered = self.inner.output.send(&to, ServerEvent::Signal { from, data });
        if delivered {
            debug!("Relayed signal {} -> {}", from, to);
        } else {
            debug!("Dropped signal {} -> {}: target unreachable", from, to);
        }
        delivered
    }
}

fn broadcast_except(
    output: &dyn SignalingOutput,
    members: &[Member],
    except: &ConnectionId,
    event: &ServerEvent,
) {
    for member in members.iter().filter(|member| &member.id != except) {
        output.send(&member.id, event.clone());
    }
}
