use std::sync::Arc;

use crate::domain::{RepoError, standing::StandingRepository};

#[async_trait::async_trait]
pub trait ListPlayersUseCase {
    async fn list_players(&self) -> Result<Vec<String>, ListPlayersError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ListPlayersError {
    #[error("internal error")]
    Internal,
}

pub struct ListPlayersUseCaseImpl<S: StandingRepository> {
    standing_repository: Arc<S>,
}

impl<S: StandingRepository> ListPlayersUseCaseImpl<S> {
    pub fn new(standing_repository: Arc<S>) -> Self {
        Self {
            standing_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: StandingRepository + Send + Sync + 'static> ListPlayersUseCase
    for ListPlayersUseCaseImpl<S>
{
    async fn list_players(&self) -> Result<Vec<String>, ListPlayersError> {
        self.standing_repository
            .list_player_names()
            .await
            .map_err(|RepoError::StorageError(e)| {
                log::error!("Failed to list players: {}", e);
                ListPlayersError::Internal
            })
    }
}
