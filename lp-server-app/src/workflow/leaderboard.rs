use std::sync::Arc;

use crate::domain::{
    RepoError,
    leaderboard::{LeaderboardRow, Podium, build_leaderboard},
    match_log::MatchLogRepository,
    standing::StandingRepository,
};

#[derive(Clone, Debug)]
pub struct LeaderboardView {
    pub rows: Vec<LeaderboardRow>,
    pub podium: Podium,
}

#[async_trait::async_trait]
pub trait LeaderboardUseCase {
    async fn build_leaderboard(&self) -> Result<LeaderboardView, LeaderboardError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("internal error")]
    Internal,
}

pub struct LeaderboardUseCaseImpl<S: StandingRepository, L: MatchLogRepository> {
    standing_repository: Arc<S>,
    match_log_repository: Arc<L>,
}

impl<S: StandingRepository, L: MatchLogRepository> LeaderboardUseCaseImpl<S, L> {
    pub fn new(standing_repository: Arc<S>, match_log_repository: Arc<L>) -> Self {
        Self {
            standing_repository,
            match_log_repository,
        }
    }
}

#[async_trait::async_trait]
impl<
    S: StandingRepository + Send + Sync + 'static,
    L: MatchLogRepository + Send + Sync + 'static,
> LeaderboardUseCase for LeaderboardUseCaseImpl<S, L>
{
    async fn build_leaderboard(&self) -> Result<LeaderboardView, LeaderboardError> {
        let standings = self
            .standing_repository
            .list_standings()
            .await
            .map_err(|RepoError::StorageError(e)| {
                log::error!("Failed to list standings for leaderboard: {}", e);
                LeaderboardError::Internal
            })?;
        let logs = self
            .match_log_repository
            .list_logs()
            .await
            .map_err(|RepoError::StorageError(e)| {
                log::error!("Failed to list match logs for leaderboard: {}", e);
                LeaderboardError::Internal
            })?;

        let rows = build_leaderboard(standings, &logs);
        let podium = Podium::from_leaderboard(&rows);
        Ok(LeaderboardView { rows, podium })
    }
}

#[cfg(test)]
mod tests {
    use lp_core::{Division, LadderPolicy, Rank};

    use crate::{
        domain::{
            memory::InMemoryLadderRepository, progression::ProgressionServiceImpl,
            standing::PlayerStanding,
        },
        workflow::matches::log_match::{LogMatchUseCase, LogMatchUseCaseImpl},
    };
    use crate::domain::match_log::MatchResult;

    use super::*;

    #[tokio::test]
    async fn test_leaderboard_from_logged_matches() {
        let repo = Arc::new(InMemoryLadderRepository::new());
        for name in ["A", "B", "C"] {
            repo.create_standing(PlayerStanding {
                player_name: name.to_string(),
                rank: Rank::Silver,
                division: Division::IV,
                current_lp: 50,
            })
            .await
            .unwrap();
        }
        let log_match = LogMatchUseCaseImpl::new(
            repo.clone(),
            Arc::new(ProgressionServiceImpl::new(LadderPolicy::PromotionOnly)),
        );
        log_match.log_match("A", MatchResult::Win, Some(30)).await.unwrap();
        log_match.log_match("A", MatchResult::Win, Some(20)).await.unwrap();
        log_match.log_match("B", MatchResult::Win, Some(50)).await.unwrap();
        log_match.log_match("C", MatchResult::Lose, Some(10)).await.unwrap();

        let view = LeaderboardUseCaseImpl::new(repo.clone(), repo)
            .build_leaderboard()
            .await
            .unwrap();

        let summary: Vec<(&str, usize, &str, u32)> = view
            .rows
            .iter()
            .map(|r| {
                (
                    r.player_name.as_str(),
                    r.position,
                    r.lp_gained_lost.as_str(),
                    r.total_games_played,
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![("A", 1, "+50", 2), ("B", 2, "+50", 1), ("C", 3, "-10", 1)]
        );

        let a = &view.rows[0];
        assert_eq!(a.rank, Rank::Silver);
        assert_eq!(a.division, Division::III);
        assert_eq!(a.current_lp, 0);

        assert_eq!(view.podium.len(), 3);
        assert_eq!(view.podium.first.as_ref().unwrap().player_name, "A");
        assert_eq!(view.podium.third.as_ref().unwrap().player_name, "C");
    }
}
