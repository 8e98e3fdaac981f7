use crate::repositories::errors::game_repository_errors::GameSessionRepositoryError;
use crate::services::errors::bingo_service_errors::BingoServiceError;

#[derive(Debug)]
pub enum GameSessionServiceError {
    SessionNotFound,
    SessionFull,
    InvalidMove(BingoServiceError),
    RepositoryError(GameSessionRepositoryError),
}

impl std::fmt::Display for GameSessionServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameSessionServiceError::SessionNotFound => write!(f, "Game session not found"),
            GameSessionServiceError::SessionFull => write!(f, "Game session is full"),
            GameSessionServiceError::InvalidMove(err) => write!(f, "Invalid move: {}", err),
            GameSessionServiceError::RepositoryError(err) => {
                write!(f, "Repository error: {}", err)
            }
        }
    }
}

impl std::error::Error for GameSessionServiceError {}

impl From<GameSessionRepositoryError> for GameSessionServiceError {
    fn from(err: GameSessionRepositoryError) -> Self {
        GameSessionServiceError::RepositoryError(err)
    }
}

impl From<BingoServiceError> for GameSessionServiceError {
    fn from(err: BingoServiceError) -> Self {
        GameSessionServiceError::InvalidMove(err)
    }
}
