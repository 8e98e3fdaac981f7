use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::actions;
use crate::models::ClientEvent;
use crate::state::AppState;

pub async fn websocket_handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    // The connection id doubles as the player id for its lifetime.
    let player_id = Uuid::new_v4().to_string();
    info!("WebSocket connection established: {}", player_id);

    let (mut ws_tx, mut ws_rx) = socket.split();
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    if let Err(err) = state
        .websocket_service
        .store_connection(&player_id, sender)
        .await
    {
        error!("Failed to store connection {}: {}", player_id, err);
        return;
    }

    // Writer task: forwards queued frames to the socket. It exits on its
    // own once the disconnect handler drops the stored sender.
    tokio::spawn(async move {
        while let Some(frame) = receiver.recv().await {
            if ws_tx.send(Message::Text(frame)).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = ws_rx.next().await {
        match message {
            Message::Text(text) => {
                debug!("Received message from {}: {}", player_id, text);
                match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(ClientEvent::CreateGame) => {
                        actions::create_game::handle_create_game(&state, &player_id).await;
                    }
                    Ok(ClientEvent::JoinGame { game_code }) => {
                        actions::join_game::handle_join_game(&state, &player_id, &game_code)
                            .await;
                    }
                    Ok(ClientEvent::MarkNumber { game_code, number }) => {
                        actions::mark_number::handle_mark_number(
                            &state, &player_id, &game_code, number,
                        )
                        .await;
                    }
                    Err(err) => {
                        error!("Unparseable message from {}: {}", player_id, err);
                    }
                }
            }
            Message::Close(_) => break,
            Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}
        }
    }

    info!("WebSocket connection closed: {}", player_id);
    actions::disconnect::handle_disconnect(&state, &player_id).await;
}
