use huddle_core::RoomId;
use std::collections::{BTreeSet, HashMap};

use crate::integration::init_tracing;
use crate::utils::{TestHarness, TestPeer, room};

fn expected_rooms(connected: &HashMap<usize, (String, TestPeer)>) -> BTreeSet<RoomId> {
    connected.values().map(|(name, _)| room(name)).collect()
}

#[tokio::test]
async fn test_room_set_tracks_members() {
    init_tracing();

    let harness = TestHarness::new();
    let rooms = ["alpha", "beta", "gamma"];
    let mut connected: HashMap<usize, (String, TestPeer)> = HashMap::new();

    // Deterministic interleaving of joins and leaves across three rooms.
    for step in 0..60usize {
        let slot = (step * 7) % 11;
        if let Some((_, peer)) = connected.remove(&slot) {
            harness.leave(&peer);
        } else {
            let name = rooms[(step * 5) % rooms.len()];
            let peer = harness.join(name, &format!("peer-{}", slot));
            connected.insert(slot, (name.to_owned(), peer));
        }

        let actual: BTreeSet<RoomId> = harness.router.registry().room_ids().into_iter().collect();
        assert_eq!(actual, expected_rooms(&connected), "Mismatch at step {}", step);
        assert_eq!(harness.router.registry().member_count(), connected.len());
    }

    for (_, peer) in connected.values() {
        harness.leave(peer);
    }
    assert!(harness.router.registry().is_empty());
}
