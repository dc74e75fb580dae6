use std::sync::Arc;

use thiserror::Error;

use crate::domain::{
    RepoRetrieveError,
    standing::{PlayerStanding, StandingRepository},
};

#[async_trait::async_trait]
pub trait GetStandingUseCase {
    async fn get_standing(&self, player_name: &str) -> Result<PlayerStanding, GetStandingError>;
}

#[derive(Debug, Error)]
pub enum GetStandingError {
    #[error("player '{0}' not found")]
    NotFound(String),
    #[error("internal error")]
    Internal,
}

pub struct GetStandingUseCaseImpl<S: StandingRepository> {
    standing_repository: Arc<S>,
}

impl<S: StandingRepository> GetStandingUseCaseImpl<S> {
    pub fn new(standing_repository: Arc<S>) -> Self {
        Self {
            standing_repository,
        }
    }
}

#[async_trait::async_trait]
impl<S: StandingRepository + Send + Sync + 'static> GetStandingUseCase
    for GetStandingUseCaseImpl<S>
{
    async fn get_standing(&self, player_name: &str) -> Result<PlayerStanding, GetStandingError> {
        match self.standing_repository.get_standing(player_name).await {
            Ok(standing) => Ok(standing),
            Err(RepoRetrieveError::NotFound) => {
                Err(GetStandingError::NotFound(player_name.to_string()))
            }
            Err(RepoRetrieveError::StorageError(e)) => {
                log::error!("Error retrieving standing for player {}: {}", player_name, e);
                Err(GetStandingError::Internal)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use lp_core::{Division, Rank};

    use crate::domain::memory::InMemoryLadderRepository;

    use super::*;

    #[tokio::test]
    async fn test_get_standing() {
        let repo = Arc::new(InMemoryLadderRepository::new());
        let standing = PlayerStanding {
            player_name: "Gumayusi".to_string(),
            rank: Rank::Master,
            division: Division::I,
            current_lp: 250,
        };
        repo.create_standing(standing.clone()).await.unwrap();

        let use_case = GetStandingUseCaseImpl::new(repo);
        assert_eq!(use_case.get_standing("Gumayusi").await.unwrap(), standing);
        assert!(matches!(
            use_case.get_standing("gumayusi").await,
            Err(GetStandingError::NotFound(_))
        ));
    }
}
