use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::player::Player;

pub const MAX_PLAYERS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    WaitingForPlayer,
    Active,
    Finished,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub game_code: String,
    pub players: Vec<Player>,
    pub current_turn: String,
    pub called_numbers: Vec<u8>,
    pub status: GameStatus,
    pub winner: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    pub fn new(game_code: &str, host_id: &str) -> Self {
        GameSession {
            game_code: game_code.to_string(),
            players: vec![Player::new(host_id, true)],
            current_turn: host_id.to_string(),
            called_numbers: vec![],
            status: GameStatus::WaitingForPlayer,
            winner: None,
            created_at: Utc::now(),
        }
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.player(player_id).is_some()
    }

    pub fn opponent_id(&self, player_id: &str) -> Option<String> {
        self.players
            .iter()
            .find(|p| p.id != player_id)
            .map(|p| p.id.clone())
    }

    pub fn host_id(&self) -> Option<String> {
        self.players
            .iter()
            .find(|p| p.is_host)
            .map(|p| p.id.clone())
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= MAX_PLAYERS
    }
}
