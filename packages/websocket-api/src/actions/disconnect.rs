use tracing::error;

use crate::models::ServerEvent;
use crate::state::AppState;

pub async fn handle_disconnect(state: &AppState, player_id: &str) {
    match state.game_session_service.remove_player(player_id).await {
        Ok(Some(session)) => {
            // The service has already released the code, so a new session
            // may mint it at any moment. Tear down per player, bindings
            // first, to leave such a session untouched.
            let recipients: Vec<String> =
                session.players.iter().map(|p| p.id.clone()).collect();
            for recipient in &recipients {
                if let Err(err) = state.websocket_service.unbind_player(recipient).await {
                    error!(
                        "Failed to unbind player {} from game {}: {}",
                        recipient, session.game_code, err
                    );
                }
            }

            let notice = ServerEvent::opponent_disconnected();
            state
                .websocket_service
                .notify_players(&recipients, &notice.to_json())
                .await;
        }
        Ok(None) => {}
        Err(err) => {
            error!("Failed to remove {} from their game: {}", player_id, err);
        }
    }

    if let Err(err) = state.websocket_service.remove_connection(player_id).await {
        error!("Failed to remove connection for {}: {}", player_id, err);
    }
}
