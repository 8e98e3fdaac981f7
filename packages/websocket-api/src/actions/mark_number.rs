use shared::services::errors::game_session_service_errors::GameSessionServiceError;
use tracing::{debug, error};

use crate::models::ServerEvent;
use crate::state::AppState;

pub async fn handle_mark_number(state: &AppState, player_id: &str, game_code: &str, number: u8) {
    let session = match state
        .game_session_service
        .mark_number(game_code, player_id, number)
        .await
    {
        Ok(session) => session,
        Err(GameSessionServiceError::InvalidMove(err)) => {
            debug!(
                "Ignored mark of {} by {} in game {}: {}",
                number, player_id, game_code, err
            );
            return;
        }
        Err(GameSessionServiceError::SessionNotFound) => {
            debug!("Ignored mark by {} for unknown game {}", player_id, game_code);
            return;
        }
        Err(err) => {
            error!(
                "Failed to mark {} by {} in game {}: {}",
                number, player_id, game_code, err
            );
            return;
        }
    };

    let game_state = ServerEvent::game_state(&session);
    match session.winner.clone() {
        Some(winner_id) => {
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

            state
                .websocket_service
                .notify_players(&recipients, &game_state.to_json())
                .await;
            let game_won = ServerEvent::GameWon { winner_id };
            state
                .websocket_service
                .notify_players(&recipients, &game_won.to_json())
                .await;
        }
        None => {
            if let Err(err) = state
                .websocket_service
                .broadcast_to_game(&session.game_code, &game_state.to_json())
                .await
            {
                error!(
                    "Failed to broadcast game state for game {}: {}",
                    session.game_code, err
                );
            }
        }
    }
}
