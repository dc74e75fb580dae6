use std::sync::Arc;

use lp_core::{Division, InvalidLadderPosition, LadderPosition, Rank};
use thiserror::Error;

use crate::domain::{
    RepoCreateError,
    standing::{PlayerStanding, StandingRepository, validate_player_name},
};

#[async_trait::async_trait]
pub trait RegisterPlayerUseCase {
    async fn register(
        &self,
        player_name: &str,
        rank: Rank,
        division: Division,
        current_lp: u32,
    ) -> Result<PlayerStanding, RegisterPlayerError>;
}

#[derive(Debug, Error)]
pub enum RegisterPlayerError {
    #[error("{0}")]
    InvalidName(String),
    #[error("invalid ladder position: {0}")]
    InvalidLadderPosition(#[from] InvalidLadderPosition),
    #[error("player '{0}' is already registered")]
    AlreadyExists(String),
    #[error("internal error")]
    Internal,
}

pub struct RegisterPlayerUseCaseImpl<S: StandingRepository> {
    standing_repository: Arc<S>,
}

impl<S: StandingRepository> RegisterPlayerUseCaseImpl<S> {
    pub fn new(standing_repository: Arc<S>) -> Self {
        Self {
            standing_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: StandingRepository + Send + Sync + 'static> RegisterPlayerUseCase
    for RegisterPlayerUseCaseImpl<S>
{
    async fn register(
        &self,
        player_name: &str,
        rank: Rank,
        division: Division,
        current_lp: u32,
    ) -> Result<PlayerStanding, RegisterPlayerError> {
        let player_name = validate_player_name(player_name).map_err(RegisterPlayerError::InvalidName)?;
        let position = LadderPosition::new(rank, division, current_lp as i64)?;
        let standing = PlayerStanding::new(player_name, position);

        match self.standing_repository.create_standing(standing.clone()).await {
            Ok(()) => {
                log::info!(
                    "Registered player {} at {}",
                    standing.player_name,
                    position
                );
                Ok(standing)
            }
            Err(RepoCreateError::Conflict) => {
                Err(RegisterPlayerError::AlreadyExists(standing.player_name))
            }
            Err(RepoCreateError::StorageError(e)) => {
                log::error!(
                    "Failed to register player {}: {}",
                    standing.player_name,
                    e
                );
                Err(RegisterPlayerError::Internal)
            }
        }
    }
}
