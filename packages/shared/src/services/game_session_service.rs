use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    models::game_session::{GameSession, GameStatus},
    repositories::{
        errors::game_repository_errors::GameSessionRepositoryError,
        game_repository::GameSessionRepository,
    },
    services::{
        bingo_service::BingoService,
        errors::{
            bingo_service_errors::BingoServiceError,
            game_session_service_errors::GameSessionServiceError,
        },
    },
};

const GAME_CODE_LENGTH: usize = 5;
const GAME_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Clone)]
pub struct GameSessionService {
    repository: Arc<dyn GameSessionRepository + Send + Sync>,
    bingo_service: BingoService,
}

impl GameSessionService {
    pub fn new(repository: Arc<dyn GameSessionRepository + Send + Sync>) -> Self {
        GameSessionService {
            repository,
            bingo_service: BingoService::new(),
        }
    }

    /// Create a session under a fresh code and seat the creator as host.
    /// Regenerates the code until the insert finds it unused.
    pub async fn create_game(
        &self,
        player_id: &str,
    ) -> Result<GameSession, GameSessionServiceError> {
        loop {
            let game_code = generate_game_code();
            let session = GameSession::new(&game_code, player_id);
            let snapshot = session.clone();

            match self.repository.insert_game_session(session).await {
                Ok(_) => {
                    info!("Created game {} for player: {}", game_code, player_id);
                    return Ok(snapshot);
                }
                Err(GameSessionRepositoryError::AlreadyExists) => {
                    debug!("Game code {} already in use, generating another", game_code);
                }
            }
        }
    }

    /// Seat a second player on a waiting session. Unknown and finished
    /// codes both surface as SessionNotFound; a started session, or the
    /// creator rejoining their own code, as SessionFull.
    pub async fn join_game(
        &self,
        game_code: &str,
        player_id: &str,
    ) -> Result<GameSession, GameSessionServiceError> {
        let handle = self
            .repository
            .get_game_session(game_code)
            .await?
            .ok_or(GameSessionServiceError::SessionNotFound)?;

        let mut session = handle.lock().await;
        match session.status {
            GameStatus::WaitingForPlayer => {}
            GameStatus::Active => return Err(GameSessionServiceError::SessionFull),
            GameStatus::Finished => return Err(GameSessionServiceError::SessionNotFound),
        }

        self.bingo_service
            .join_game(&mut session, player_id)
            .map_err(|err| match err {
                BingoServiceError::GameFull
                | BingoServiceError::GameAlreadyStarted
                | BingoServiceError::AlreadyJoined => GameSessionServiceError::SessionFull,
                other => GameSessionServiceError::InvalidMove(other),
            })?;

        info!("Player {} joined game: {}", player_id, game_code);
        Ok(session.clone())
    }

    /// Apply a mark and return the post-move snapshot. A winning mark
    /// finishes the session and releases its code before returning.
    pub async fn mark_number(
        &self,
        game_code: &str,
        player_id: &str,
        number: u8,
    ) -> Result<GameSession, GameSessionServiceError> {
        let handle = self
            .repository
            .get_game_session(game_code)
            .await?
            .ok_or(GameSessionServiceError::SessionNotFound)?;

        let snapshot = {
            let mut session = handle.lock().await;
            // Finished sessions are eviction-pending; callers see them as
            // already gone.
            if session.status == GameStatus::Finished {
                return Err(GameSessionServiceError::SessionNotFound);
            }
            self.bingo_service
                .validate_and_mark_number(&mut session, player_id, number)?;
            session.clone()
        };

        if snapshot.status == GameStatus::Finished {
            self.repository.remove_game_session(game_code).await?;
            info!("Player {} won game: {}", player_id, game_code);
        } else {
            debug!(
                "Player {} marked {} in game: {}",
                player_id, number, game_code
            );
        }

        Ok(snapshot)
    }

    /// End and evict whichever session seats the player, if any. Safe to
    /// call for players who are seated nowhere, any number of times.
    pub async fn remove_player(
        &self,
        player_id: &str,
    ) -> Result<Option<GameSession>, GameSessionServiceError> {
        let handle = match self.repository.find_game_by_player(player_id).await? {
            Some(handle) => handle,
            None => {
                debug!("Player {} is not seated in any game", player_id);
                return Ok(None);
            }
        };

        let snapshot = {
            let mut session = handle.lock().await;
            if session.status == GameStatus::Finished {
                return Ok(None);
            }
            session.status = GameStatus::Finished;
            session.clone()
        };

        self.repository
            .remove_game_session(&snapshot.game_code)
            .await?;
        info!(
            "Removed player {} and ended game: {}",
            player_id, snapshot.game_code
        );

        Ok(Some(snapshot))
    }
}

fn generate_game_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    (0..GAME_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..GAME_CODE_ALPHABET.len());
            GAME_CODE_ALPHABET[idx] as char
        })
        .collect()
}
