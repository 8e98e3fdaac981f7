use serde::{Deserialize, Serialize};

use crate::models::card::BingoCard;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub card: BingoCard,
    pub marked_numbers: Vec<u8>,
    pub is_host: bool,
}

impl Player {
    pub fn new(id: &str, is_host: bool) -> Self {
        Player {
            id: id.to_string(),
            card: BingoCard::random(),
            marked_numbers: vec![],
            is_host,
        }
    }
}
