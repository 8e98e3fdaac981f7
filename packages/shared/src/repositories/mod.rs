pub mod errors;
pub mod game_repository;
pub mod websocket_repository;
