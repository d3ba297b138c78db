use huddle_core::ConnectionId;
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::{TestHarness, room};

#[tokio::test]
async fn test_relay_to_unknown_target() {
    init_tracing();

    let harness = TestHarness::new();
    let mut alice = harness.join("r", "Alice");
    let mut bob = harness.join("r", "Bob");
    alice.drain();
    bob.drain();

    let delivered = harness
        .router
        .relay(alice.id, ConnectionId::new(), json!({ "type": "answer" }));

    assert!(!delivered);
    assert!(alice.drain().is_empty());
    assert!(bob.drain().is_empty());
    assert_eq!(harness.router.registry().snapshot(&room("r")).len(), 2);
}

#[tokio::test]
async fn test_relay_to_departed_peer() {
    init_tracing();

    let harness = TestHarness::new();
    let mut alice = harness.join("r", "Alice");
    let bob = harness.join("r", "Bob");
    harness.leave(&bob);
    alice.drain();

    assert!(!harness.router.relay(alice.id, bob.id, json!("late")));
    assert!(alice.drain().is_empty());
}
