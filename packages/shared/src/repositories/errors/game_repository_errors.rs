#[derive(Debug)]
pub enum GameSessionRepositoryError {
    AlreadyExists,
}

impl std::fmt::Display for GameSessionRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameSessionRepositoryError::AlreadyExists => {
                write!(f, "Game session already exists")
            }
        }
    }
}

impl std::error::Error for GameSessionRepositoryError {}
