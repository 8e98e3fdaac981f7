use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use shared::models::card::BingoCard;
use shared::models::game_session::GameSession;
use shared::models::player::Player;

/// Inbound client frames, tagged by `action`.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ClientEvent {
    CreateGame,
    #[serde(rename_all = "camelCase")]
    JoinGame { game_code: String },
    #[serde(rename_all = "camelCase")]
    MarkNumber { game_code: String, number: u8 },
}

/// Outbound server frames, tagged by `event`.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    GameCreated { game_code: String, player_id: String },
    #[serde(rename_all = "camelCase")]
    GameJoined { game_code: String, player_id: String },
    #[serde(rename_all = "camelCase")]
    GameState {
        game_code: String,
        host_id: String,
        players: Vec<PlayerView>,
        current_turn: String,
        called_numbers: Vec<u8>,
    },
    #[serde(rename_all = "camelCase")]
    GameWon { winner_id: String },
    GameEnded { message: String },
    JoinError { message: String },
}

/// What each player looks like on the wire. The host flag stays
/// server-side; clients see it only through `hostId`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub id: String,
    pub card: BingoCard,
    pub marked_numbers: Vec<u8>,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        PlayerView {
            id: player.id.clone(),
            card: player.card.clone(),
            marked_numbers: player.marked_numbers.clone(),
        }
    }
}

impl ServerEvent {
    pub fn game_state(session: &GameSession) -> Self {
        ServerEvent::GameState {
            game_code: session.game_code.clone(),
            host_id: session.host_id().unwrap_or_default(),
            players: session.players.iter().map(PlayerView::from).collect(),
            current_turn: session.current_turn.clone(),
            called_numbers: session.called_numbers.clone(),
        }
    }

    pub fn join_error() -> Self {
        ServerEvent::JoinError {
            message: "Game not found or full".to_string(),
        }
    }

    pub fn opponent_disconnected() -> Self {
        ServerEvent::GameEnded {
            message: "Opponent disconnected".to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            error!("Failed to serialize server event: {}", err);
            json!({"event": "error"}).to_string()
        })
    }
}
