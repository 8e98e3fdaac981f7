use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::models::game_session::{GameSession, GameStatus};
use crate::repositories::errors::game_repository_errors::GameSessionRepositoryError;

#[cfg(test)]
use mockall::automock;

/// Shared handle to one stored session. The outer map lock only guards
/// insert/lookup/remove; all game mutation happens under this per-session
/// mutex, so independent sessions never contend.
pub type SessionHandle = Arc<Mutex<GameSession>>;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait GameSessionRepository: Send + Sync {
    async fn insert_game_session(
        &self,
        game_session: GameSession,
    ) -> Result<SessionHandle, GameSessionRepositoryError>;

    async fn get_game_session(
        &self,
        game_code: &str,
    ) -> Result<Option<SessionHandle>, GameSessionRepositoryError>;

    async fn remove_game_session(
        &self,
        game_code: &str,
    ) -> Result<(), GameSessionRepositoryError>;

    async fn find_game_by_player(
        &self,
        player_id: &str,
    ) -> Result<Option<SessionHandle>, GameSessionRepositoryError>;
}

pub struct InMemoryGameSessionRepository {
    sessions: RwLock<HashMap<String, SessionHandle>>,
}

impl InMemoryGameSessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryGameSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameSessionRepository for InMemoryGameSessionRepository {
    async fn insert_game_session(
        &self,
        game_session: GameSession,
    ) -> Result<SessionHandle, GameSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;

        // The occupancy check and the insert happen under one write guard,
        // so two creations racing on the same code cannot both succeed.
        match sessions.entry(game_session.game_code.clone()) {
            Entry::Occupied(_) => Err(GameSessionRepositoryError::AlreadyExists),
            Entry::Vacant(slot) => {
                let handle = Arc::new(Mutex::new(game_session));
                slot.insert(Arc::clone(&handle));
                Ok(handle)
            }
        }
    }

    async fn get_game_session(
        &self,
        game_code: &str,
    ) -> Result<Option<SessionHandle>, GameSessionRepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(game_code).cloned())
    }

    async fn remove_game_session(
        &self,
        game_code: &str,
    ) -> Result<(), GameSessionRepositoryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(game_code).is_some() {
            info!("Removed game session: {}", game_code);
        }
        Ok(())
    }

    async fn find_game_by_player(
        &self,
        player_id: &str,
    ) -> Result<Option<SessionHandle>, GameSessionRepositoryError> {
        // Clone the handles out first so no session mutex is taken while
        // the map lock is held.
        let handles: Vec<SessionHandle> = {
            let sessions = self.sessions.read().await;
            sessions.values().cloned().collect()
        };

        for handle in handles {
            let session = handle.lock().await;
            // A finished session is only still mapped while its eviction is
            // in flight; treat it as already gone.
            if session.status != GameStatus::Finished && session.has_player(player_id) {
                drop(session);
                return Ok(Some(handle));
            }
        }

        Ok(None)
    }
}
