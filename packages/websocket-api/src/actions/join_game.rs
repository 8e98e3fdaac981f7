use shared::services::errors::game_session_service_errors::GameSessionServiceError;
use tracing::{error, info};

use crate::models::ServerEvent;
use crate::state::AppState;

pub async fn handle_join_game(state: &AppState, player_id: &str, game_code: &str) {
    let session = match state.game_session_service.join_game(game_code, player_id).await {
        Ok(session) => session,
        Err(
            GameSessionServiceError::SessionNotFound | GameSessionServiceError::SessionFull,
        ) => {
            info!("Rejected join from {} for game {}", player_id, game_code);
            if let Err(err) = state
                .websocket_service
                .send_message(player_id, &ServerEvent::join_error().to_json())
                .await
            {
                error!("Failed to send joinError to {}: {}", player_id, err);
            }
            return;
        }
        Err(err) => {
            error!("Failed to join {} to game {}: {}", player_id, game_code, err);
            return;
        }
    };

    if let Err(err) = state
        .websocket_service
        .bind_game(player_id, &session.game_code)
        .await
    {
        error!(
            "Failed to bind {} to game {}: {}",
            player_id, session.game_code, err
        );
        return;
    }

    let ack = ServerEvent::GameJoined {
        game_code: session.game_code.clone(),
        player_id: player_id.to_string(),
    };
    if let Err(err) = state
        .websocket_service
        .send_message(player_id, &ack.to_json())
        .await
    {
        error!("Failed to send gameJoined to {}: {}", player_id, err);
    }

    let game_state = ServerEvent::game_state(&session);
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
