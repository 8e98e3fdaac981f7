use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::sync::RwLock;
use tracing::info;

#[cfg(test)]
use mockall::automock;

/// Outbound half of a connection: frames pushed here are written to the
/// websocket by the connection's writer task.
pub type OutboundSender = mpsc::UnboundedSender<String>;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait WebSocketRepository: Send + Sync {
    async fn store_connection(
        &self,
        player_id: &str,
        sender: OutboundSender,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn remove_connection(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn bind_game(
        &self,
        player_id: &str,
        game_code: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn connections_in_game(
        &self,
        game_code: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    async fn unbind_game(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn send_message(
        &self,
        player_id: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

struct ConnectionRecord {
    sender: OutboundSender,
    game_code: Option<String>,
    connected_at: DateTime<Utc>,
}

pub struct InMemoryWebSocketRepository {
    connections: RwLock<HashMap<String, ConnectionRecord>>,
}

impl InMemoryWebSocketRepository {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryWebSocketRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebSocketRepository for InMemoryWebSocketRepository {
    async fn store_connection(
        &self,
        player_id: &str,
        sender: OutboundSender,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut connections = self.connections.write().await;
        connections.insert(
            player_id.to_string(),
            ConnectionRecord {
                sender,
                game_code: None,
                connected_at: Utc::now(),
            },
        );

        info!("Stored WebSocket connection for player: {}", player_id);
        Ok(())
    }

    async fn remove_connection(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut connections = self.connections.write().await;
        if let Some(record) = connections.remove(player_id) {
            let connected_for = Utc::now() - record.connected_at;
            info!(
                "Removed WebSocket connection for player: {} (connected for {}s)",
                player_id,
                connected_for.num_seconds()
            );
        }
        Ok(())
    }

    async fn bind_game(
        &self,
        player_id: &str,
        game_code: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut connections = self.connections.write().await;
        match connections.get_mut(player_id) {
            Some(record) => {
                record.game_code = Some(game_code.to_string());
                Ok(())
            }
            None => Err(format!("No connection found for player: {}", player_id).into()),
        }
    }

    async fn connections_in_game(
        &self,
        game_code: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let connections = self.connections.read().await;
        let players = connections
            .iter()
            .filter(|(_, record)| record.game_code.as_deref() == Some(game_code))
            .map(|(player_id, _)| player_id.clone())
            .collect();
        Ok(players)
    }

    // Idempotent: the player may already be gone when their game is torn
    // down.
    async fn unbind_game(
        &self,
        player_id: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut connections = self.connections.write().await;
        if let Some(record) = connections.get_mut(player_id) {
            record.game_code = None;
        }
        Ok(())
    }

    async fn send_message(
        &self,
        player_id: &str,
        message: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let connections = self.connections.read().await;
        match connections.get(player_id) {
            Some(record) => {
                record
                    .sender
                    .send(message.to_string())
                    .map_err(|_| format!("Connection channel closed for player: {}", player_id))?;
                Ok(())
            }
            None => Err(format!("No connection found for player: {}", player_id).into()),
        }
    }
}
