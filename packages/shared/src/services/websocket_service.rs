use std::sync::Arc;
use tracing::{error, info};

use crate::repositories::websocket_repository::{OutboundSender, WebSocketRepository};

#[derive(Clone)]
pub struct WebSocketService {
    repository: Arc<dyn WebSocketRepository>,
}

impl WebSocketService {
    pub fn new(repository: Arc<dyn WebSocketRepository>) -> Self {
        Self { repository }
    }

    pub async fn store_connection(
        &self,
        player_id: &str,
        sender: OutboundSender,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Storing WebSocket connection for player: {}", player_id);
        self.repository.store_connection(player_id, sender).await
    }

    pub async fn remove_connection(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Removing WebSocket connection for player: {}", player_id);
        self.repository.remove_connection(player_id).await
    }

    pub async fn bind_game(
        &self,
        player_id: &str,
        game_code: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Binding player {} to game: {}", player_id, game_code);
        self.repository.bind_game(player_id, game_code).await
    }

    pub async fn send_message(
        &self,
        player_id: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Sending message to player: {}", player_id);
        self.repository.send_message(player_id, message).await
    }

    /// Deliver a payload to each named player. A recipient that went away
    /// is logged and skipped so the rest still hear the event.
    pub async fn notify_players(&self, player_ids: &[String], message: &str) {
        for player_id in player_ids {
            if let Err(err) = self.repository.send_message(player_id, message).await {
                error!("Failed to deliver to player {}: {}", player_id, err);
            }
        }
    }

    /// Deliver a payload to every connection bound to the game.
    pub async fn broadcast_to_game(
        &self,
        game_code: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let players = self.repository.connections_in_game(game_code).await?;
        info!(
            "Broadcasting to {} connection(s) in game: {}",
            players.len(),
            game_code
        );
        self.notify_players(&players, message).await;
        Ok(())
    }

    /// Drop a player's game binding, so a later session reusing the code
    /// cannot reach them.
    pub async fn unbind_player(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!("Unbinding player {} from their game", player_id);
        self.repository.unbind_game(player_id).await
    }
}
