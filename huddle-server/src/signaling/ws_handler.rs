use crate::state::AppState;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use huddle_core::{ClientMessage, ConnectionId};
use serde::Deserialize;
use tracing::{error, info, warn};

/// Query string of `GET /ws`.
#[derive(Debug, Default, Deserialize)]
pub struct ConnectParams {
    pub room: Option<String>,
    pub name: Option<String>,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(params): Query<ConnectParams>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, params, state))
}

async fn handle_socket(socket: WebSocket, params: ConnectParams, state: AppState) {
    let connection_id = ConnectionId::new();
    let (mut sender, mut receiver) = socket.split();

    // Registered before admission so `usersInRoom` has somewhere to go.
    let mut rx = state.hub.add_connection(connection_id);

    if let Err(e) = state
        .router
        .connect(connection_id, params.room.as_deref(), params.name)
    {
        warn!("Rejected connection {}: {}", connection_id, e);
        state.hub.remove_connection(&connection_id);
        let _ = sender.send(Message::Close(None)).await;
        return;
    }

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let json = match event.to_json() {
                Ok(json) => json,
                Err(e) => {
                    error!("Dropping event for {}: {}", connection_id, e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let router = state.router.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match ClientMessage::from_json(text.as_str()) {
                        Ok(ClientMessage::Signal { to, data }) => {
                            router.relay(connection_id, to, data);
                        }
                        Err(e) => warn!("Invalid frame from {}: {}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    state.router.disconnect(&connection_id);
    state.hub.remove_connection(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}
