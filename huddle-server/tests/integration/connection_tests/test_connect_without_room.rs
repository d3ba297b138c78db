use huddle_core::ConnectionId;
use huddle_server::SignalingError;

use crate::integration::{create_recording_router, init_tracing};

#[tokio::test]
async fn test_connect_without_room() {
    init_tracing();

    let (router, output) = create_recording_router();
    let id = ConnectionId::new();

    assert_eq!(
        router.connect(id, None, Some("Alice".into())),
        Err(SignalingError::MissingRoom)
    );
    assert_eq!(
        router.connect(ConnectionId::new(), Some(""), None),
        Err(SignalingError::MissingRoom)
    );

    assert!(output.sent().is_empty(), "Rejected connects must not emit");
    assert!(router.registry().is_empty());
    assert_eq!(router.room_of(&id), None);

    // A rejected connection's disconnect is a no-op.
    assert!(!router.disconnect(&id));
    assert!(output.sent().is_empty());
}
