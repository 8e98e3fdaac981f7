pub mod create_game;
pub mod disconnect;
pub mod join_game;
pub mod mark_number;
