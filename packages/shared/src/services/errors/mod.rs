pub mod bingo_service_errors;
pub mod game_session_service_errors;
