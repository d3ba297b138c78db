use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use huddle_core::{ConnectionId, Member, RoomId};
use tracing::debug;

/// In-memory map from room to the members currently joined, in join order.
///
/// A room exists only while it has at least one member: it is created by the
/// first insertion and dropped by the removal that empties it. Each room's
/// entry is mutated under its shard lock, so concurrent joins and leaves of
/// the same room are linearizable.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: DashMap<RoomId, Vec<Member>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the room's members, or an empty list if the room does not exist.
    pub fn snapshot(&self, room_id: &RoomId) -> Vec<Member> {
        self.rooms
            .get(room_id)
            .map(|members| members.value().clone())
            .unwrap_or_default()
    }

    pub fn add(&self, room_id: RoomId, member: Member) {
        self.join(room_id, member, |_, _| ());
    }

    pub fn remove(&self, room_id: &RoomId, connection_id: &ConnectionId) {
        self.leave(room_id, connection_id, |_| ());
    }

    /// Appends `member` and runs `f(before, after)` without releasing the
    /// room's lock, where `before` is the membership prior to the insertion.
    pub fn join<R>(
        &self,
        room_id: RoomId,
        member: Member,
        f: impl FnOnce(&[Member], &[Member]) -> R,
    ) -> R {
        let mut members = self.rooms.entry(room_id).or_default();
        if members.is_empty() {
            debug!("Creating room: {}", members.key());
        }

        let before = members.len();
        members.push(member);

        f(&members[..before], &members[..])
    }

    /// Removes `connection_id` from the room and runs `f(remaining)` under
    /// the room's lock. Returns `None` without calling `f` when the room or
    /// the member does not exist.
    pub fn leave<R>(
        &self,
        room_id: &RoomId,
        connection_id: &ConnectionId,
        f: impl FnOnce(&[Member]) -> R,
    ) -> Option<R> {
        let Entry::Occupied(mut entry) = self.rooms.entry(room_id.clone()) else {
            return None;
        };

        let members = entry.get_mut();
        let before = members.len();
        members.retain(|member| &member.id != connection_id);
        if members.len() == before {
            return None;
        }

        let result = f(members.as_slice());

        if entry.get().is_empty() {
            debug!("Dropping empty room: {}", room_id);
            entry.remove();
        }

        Some(result)
    }

    pub fn contains(&self, room_id: &RoomId) -> bool {
        self.rooms.contains_key(room_id)
    }

    pub fn room_ids(&self) -> Vec<RoomId> {
        self.rooms.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total members across all rooms.
    pub fn member_count(&self) -> usize {
        self.rooms.iter().map(|entry| entry.value().len()).sum()
    }
}
