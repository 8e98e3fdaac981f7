pub mod card;
pub mod game_session;
pub mod player;
