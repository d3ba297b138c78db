use huddle_core::{Member, ServerEvent};

use crate::integration::init_tracing;
use crate::utils::{TestHarness, room};

#[tokio::test]
async fn test_second_peer_sees_first() {
    init_tracing();

    let harness = TestHarness::new();
    let mut alice = harness.join("r", "Alice");
    alice.drain();

    let mut bob = harness.join("r", "Bob");

    let alice_member = Member::new(alice.id, Some("Alice".into()));
    let bob_member = Member::new(bob.id, Some("Bob".into()));

    assert_eq!(
        bob.drain(),
        vec![ServerEvent::UsersInRoom(vec![alice_member.clone()])],
        "Bob should only get the pre-join snapshot"
    );
    assert_eq!(
        alice.drain(),
        vec![ServerEvent::NewUserConnected(bob_member.clone())],
        "Alice should be told about Bob exactly once"
    );
    assert_eq!(
        harness.router.registry().snapshot(&room("r")),
        vec![alice_member, bob_member]
    );
}

#[tokio::test]
async fn test_join_does_not_leak_into_other_rooms() {
    init_tracing();

    let harness = TestHarness::new();
    let mut carol = harness.join("elsewhere", "Carol");
    carol.drain();

    let mut alice = harness.join("r", "Alice");

    assert_eq!(alice.drain(), vec![ServerEvent::UsersInRoom(Vec::new())]);
    assert!(carol.drain().is_empty());
}
