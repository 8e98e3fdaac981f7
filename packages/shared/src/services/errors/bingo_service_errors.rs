#[derive(Debug)]
pub enum BingoServiceError {
    GameNotActive,
    GameAlreadyStarted,
    GameFull,
    AlreadyJoined,
    NotYourTurn,
    NumberNotOnCard,
    NumberAlreadyMarked,
}

impl std::fmt::Display for BingoServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BingoServiceError::GameNotActive => write!(f, "Game is not active"),
            BingoServiceError::GameAlreadyStarted => write!(f, "Game has already started"),
            BingoServiceError::GameFull => write!(f, "Game already has two players"),
            BingoServiceError::AlreadyJoined => {
                write!(f, "Player is already seated in this game")
            }
            BingoServiceError::NotYourTurn => write!(f, "Not your turn"),
            BingoServiceError::NumberNotOnCard => {
                write!(f, "Number is not on the player's card")
            }
            BingoServiceError::NumberAlreadyMarked => {
                write!(f, "Number has already been marked")
            }
        }
    }
}

impl std::error::Error for BingoServiceError {}
