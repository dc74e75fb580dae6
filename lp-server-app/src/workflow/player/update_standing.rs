use std::sync::Arc;

use lp_core::{Division, InvalidLadderPosition, LadderPosition, Rank};
use thiserror::Error;

use crate::domain::{
    RepoUpdateError,
    standing::{PlayerStanding, StandingRepository},
};

/// Overwrites a player's standing without logging a match, for correcting a
/// mis-entered registration.
#[async_trait::async_trait]
pub trait UpdateStandingUseCase {
    async fn update_standing(
        &self,
        player_name: &str,
        rank: Rank,
        division: Division,
        current_lp: u32,
    ) -> Result<PlayerStanding, UpdateStandingError>;
}

#[derive(Debug, Error)]
pub enum UpdateStandingError {
    #[error("player '{0}' not found")]
    NotFound(String),
    #[error("invalid ladder position: {0}")]
    InvalidLadderPosition(#[from] InvalidLadderPosition),
    #[error("internal error")]
    Internal,
}

pub struct UpdateStandingUseCaseImpl<S: StandingRepository> {
    standing_repository: Arc<S>,
}

impl<S: StandingRepository> UpdateStandingUseCaseImpl<S> {
    pub fn new(standing_repository: Arc<S>) -> Self {
        Self {
            standing_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: StandingRepository + Send + Sync + 'static> UpdateStandingUseCase
    for UpdateStandingUseCaseImpl<S>
{
    async fn update_standing(
        &self,
        player_name: &str,
        rank: Rank,
        division: Division,
        current_lp: u32,
    ) -> Result<PlayerStanding, UpdateStandingError> {
        let position = LadderPosition::new(rank, division, current_lp as i64)?;
        let standing = PlayerStanding::new(player_name, position);

        match self.standing_repository.update_standing(&standing).await {
            Ok(()) => {
                log::info!("Corrected standing of {} to {}", player_name, position);
                Ok(standing)
            }
            Err(RepoUpdateError::NotFound) => {
                Err(UpdateStandingError::NotFound(player_name.to_string()))
            }
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to update standing of {}: {}", player_name, e);
                Err(UpdateStandingError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::memory::InMemoryLadderRepository;

    use super::*;

    #[tokio::test]
    async fn test_update_standing() {
        let repo = Arc::new(InMemoryLadderRepository::new());
        repo.create_standing(PlayerStanding {
            player_name: "Oner".to_string(),
            rank: Rank::Bronze,
            division: Division::IV,
            current_lp: 0,
        })
        .await
        .unwrap();

        let use_case = UpdateStandingUseCaseImpl::new(repo.clone());
        let updated = use_case
            .update_standing("Oner", Rank::Platinum, Division::I, 75)
            .await
            .unwrap();
        assert_eq!(repo.get_standing("Oner").await.unwrap(), updated);
        assert_eq!(updated.rank, Rank::Platinum);
        assert_eq!(updated.current_lp, 75);
        assert_eq!(repo.log_count(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_player() {
        let repo = Arc::new(InMemoryLadderRepository::new());
        let use_case = UpdateStandingUseCaseImpl::new(repo.clone());
        assert!(matches!(
            use_case
                .update_standing("Nobody", Rank::Iron, Division::IV, 0)
                .await,
            Err(UpdateStandingError::NotFound(_))
        ));
        assert_eq!(repo.standing_count(), 0);
    }
}
