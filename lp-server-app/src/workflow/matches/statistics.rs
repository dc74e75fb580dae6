use std::sync::Arc;

use crate::domain::{
    RepoError, format_lp_delta,
    match_log::{MatchLogEntry, MatchLogRepository},
};

#[derive(Clone, Debug)]
pub struct MatchStatisticsView {
    /// Most recent first.
    pub logs: Vec<MatchLogEntry>,
    /// Plain sum of `lp_change` over all logs. Losses are added, not subtracted.
    pub total_lp_change: i64,
    pub total_lp_change_display: String,
}

impl MatchStatisticsView {
    pub fn from(logs: Vec<MatchLogEntry>) -> Self {
        let total_lp_change = logs.iter().map(|l| l.lp_change as i64).sum();
        Self {
            logs,
            total_lp_change,
            total_lp_change_display: format_lp_delta(total_lp_change),
        }
    }
}

#[async_trait::async_trait]
pub trait MatchStatisticsUseCase {
    async fn get_statistics(&self) -> Result<MatchStatisticsView, MatchStatisticsError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MatchStatisticsError {
    #[error("internal error")]
    Internal,
}

pub struct MatchStatisticsUseCaseImpl<L: MatchLogRepository> {
    match_log_repository: Arc<L>,
}

impl<L: MatchLogRepository> MatchStatisticsUseCaseImpl<L> {
    pub fn new(match_log_repository: Arc<L>) -> Self {
        Self {
            match_log_repository,
        }
    }
}

#[async_trait::async_trait]
impl<L: MatchLogRepository + Send + Sync + 'static> MatchStatisticsUseCase
    for MatchStatisticsUseCaseImpl<L>
{
    async fn get_statistics(&self) -> Result<MatchStatisticsView, MatchStatisticsError> {
        match self.match_log_repository.list_logs().await {
            Ok(logs) => Ok(MatchStatisticsView::from(logs)),
            Err(RepoError::StorageError(e)) => {
                log::error!("Failed to list match logs: {}", e);
                Err(MatchStatisticsError::Internal)
            }
        }
    }
}
