use tracing::error;

use crate::models::ServerEvent;
use crate::state::AppState;

pub async fn handle_create_game(state: &AppState, player_id: &str) {
    let session = match state.game_session_service.create_game(player_id).await {
        Ok(session) => session,
        Err(err) => {
            error!("Failed to create game for {}: {}", player_id, err);
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

    let ack = ServerEvent::GameCreated {
        game_code: session.game_code.clone(),
        player_id: player_id.to_string(),
    };
    if let Err(err) = state
        .websocket_service
        .send_message(player_id, &ack.to_json())
        .await
    {
        error!("Failed to send gameCreated to {}: {}", player_id, err);
    }
}
