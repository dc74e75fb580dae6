use std::sync::Arc;

use thiserror::Error;

use crate::domain::{
    RepoUpdateError,
    match_log::{MatchLogEntry, MatchLogRepository, MatchResult},
    progression::ProgressionService,
};

#[async_trait::async_trait]
pub trait LogMatchUseCase {
    /// A missing `lp_change` counts as 0.
    async fn log_match(
        &self,
        player_name: &str,
        result: MatchResult,
        lp_change: Option<u32>,
    ) -> Result<MatchLogEntry, LogMatchError>;
}

#[derive(Debug, Error)]
pub enum LogMatchError {
    #[error("player '{0}' not found")]
    PlayerNotFound(String),
    #[error("internal error")]
    Internal,
}

pub struct LogMatchUseCaseImpl<L: MatchLogRepository, P: ProgressionService> {
    match_log_repository: Arc<L>,
    progression_service: Arc<P>,
}

impl<L: MatchLogRepository, P: ProgressionService> LogMatchUseCaseImpl<L, P> {
    pub fn new(match_log_repository: Arc<L>, progression_service: Arc<P>) -> Self {
        Self {
            match_log_repository,
            progression_service,
        }
    }
}

#[async_trait::async_trait]
impl<
    L: MatchLogRepository + Send + Sync + 'static,
    P: ProgressionService + Send + Sync + 'static,
> LogMatchUseCase for LogMatchUseCaseImpl<L, P>
{
    async fn log_match(
        &self,
        player_name: &str,
        result: MatchResult,
        lp_change: Option<u32>,
    ) -> Result<MatchLogEntry, LogMatchError> {
        let lp_change = lp_change.unwrap_or(0);
        let progression_service = self.progression_service.clone();

        match self
            .match_log_repository
            .record_match(player_name, move |standing| {
                progression_service.apply_match(&standing, result, lp_change)
            })
            .await
        {
            Ok(entry) => {
                log::info!(
                    "Logged {} ({} LP) for {}, now {} {} with {} LP",
                    entry.result,
                    entry.lp_change,
                    entry.player_name,
                    entry.rank,
                    entry.division,
                    entry.total_lp
                );
                Ok(entry)
            }
            Err(RepoUpdateError::NotFound) => {
                Err(LogMatchError::PlayerNotFound(player_name.to_string()))
            }
            Err(RepoUpdateError::StorageError(e)) => {
                log::error!("Failed to log match for player {}: {}", player_name, e);
                Err(LogMatchError::Internal)
            }
        }
    }
}
