use std::sync::{Mutex, MutexGuard};

use crate::domain::{
    RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError,
    match_log::{MatchLogEntry, MatchLogId, MatchLogRepository, NewMatchLogEntry},
    standing::{PlayerStanding, StandingRepository},
};

#[derive(Default)]
struct LadderState {
    standings: Vec<PlayerStanding>,
    logs: Vec<MatchLogEntry>,
    next_log_id: i64,
}

/// Volatile store for both relations. Every operation holds a single lock, so
/// `record_match` is as atomic as its SQL counterpart.
#[derive(Default)]
pub struct InMemoryLadderRepository {
    state: Mutex<LadderState>,
}

impl InMemoryLadderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, LadderState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory ladder state poisoned".to_string())
    }

    pub fn standing_count(&self) -> usize {
        self.lock().map(|s| s.standings.len()).unwrap_or_default()
    }

    pub fn log_count(&self) -> usize {
        self.lock().map(|s| s.logs.len()).unwrap_or_default()
    }
}

impl LadderState {
    fn push_log(&mut self, entry: NewMatchLogEntry) -> MatchLogEntry {
        self.next_log_id += 1;
        let stored = entry.with_id(MatchLogId(self.next_log_id));
        self.logs.push(stored.clone());
        stored
    }
}

#[async_trait::async_trait]
impl StandingRepository for InMemoryLadderRepository {
    async fn create_standing(&self, standing: PlayerStanding) -> Result<(), RepoCreateError> {
        let mut state = self.lock().map_err(RepoCreateError::StorageError)?;
        if state
            .standings
            .iter()
            .any(|s| s.player_name == standing.player_name)
        {
            return Err(RepoCreateError::Conflict);
        }
        state.standings.push(standing);
        Ok(())
    }

    async fn get_standing(&self, player_name: &str) -> Result<PlayerStanding, RepoRetrieveError> {
        let state = self.lock().map_err(RepoRetrieveError::StorageError)?;
        state
            .standings
            .iter()
            .find(|s| s.player_name == player_name)
            .cloned()
            .ok_or(RepoRetrieveError::NotFound)
    }

    async fn update_standing(&self, standing: &PlayerStanding) -> Result<(), RepoUpdateError> {
        let mut state = self.lock().map_err(RepoUpdateError::StorageError)?;
        let Some(existing) = state
            .standings
            .iter_mut()
            .find(|s| s.player_name == standing.player_name)
        else {
            return Err(RepoUpdateError::NotFound);
        };
        *existing = standing.clone();
        Ok(())
    }

    async fn list_player_names(&self) -> Result<Vec<String>, RepoError> {
        let state = self.lock().map_err(RepoError::StorageError)?;
        Ok(state
            .standings
            .iter()
            .map(|s| s.player_name.clone())
            .collect())
    }

    async fn list_standings(&self) -> Result<Vec<PlayerStanding>, RepoError> {
        let state = self.lock().map_err(RepoError::StorageError)?;
        Ok(state.standings.clone())
    }
}

#[async_trait::async_trait]
impl MatchLogRepository for InMemoryLadderRepository {
    async fn append_log(&self, entry: NewMatchLogEntry) -> Result<MatchLogId, RepoError> {
        let mut state = self.lock().map_err(RepoError::StorageError)?;
        if !state
            .standings
            .iter()
            .any(|s| s.player_name == entry.player_name)
        {
            return Err(RepoError::StorageError(format!(
                "no player named '{}'",
                entry.player_name
            )));
        }
        Ok(state.push_log(entry).id)
    }

    async fn list_logs(&self) -> Result<Vec<MatchLogEntry>, RepoError> {
        let state = self.lock().map_err(RepoError::StorageError)?;
        Ok(state.logs.iter().rev().cloned().collect())
    }

    async fn record_match(
        &self,
        player_name: &str,
        apply: impl FnOnce(PlayerStanding) -> NewMatchLogEntry + Send + 'static,
    ) -> Result<MatchLogEntry, RepoUpdateError> {
        let mut state = self.lock().map_err(RepoUpdateError::StorageError)?;
        let Some(index) = state
            .standings
            .iter()
            .position(|s| s.player_name == player_name)
        else {
            return Err(RepoUpdateError::NotFound);
        };
        let entry = apply(state.standings[index].clone());
        state.standings[index] = entry.standing_after();
        Ok(state.push_log(entry))
    }
}

#[cfg(test)]
mod tests {
    use lp_core::{Division, Rank};

    use crate::domain::match_log::MatchResult;

    use super::*;

    fn standing(name: &str) -> PlayerStanding {
        PlayerStanding {
            player_name: name.to_string(),
            rank: Rank::Silver,
            division: Division::II,
            current_lp: 40,
        }
    }

    #[tokio::test]
    async fn test_create_and_conflict() {
        let repo = InMemoryLadderRepository::new();
        repo.create_standing(standing("Ruler")).await.unwrap();
        assert!(matches!(
            repo.create_standing(standing("Ruler")).await,
            Err(RepoCreateError::Conflict)
        ));
        assert_eq!(repo.standing_count(), 1);
    }

    #[tokio::test]
    async fn test_logs_are_listed_most_recent_first() {
        let repo = InMemoryLadderRepository::new();
        repo.create_standing(standing("Ruler")).await.unwrap();
        for lp_change in [10, 20, 30] {
            repo.record_match("Ruler", move |s| NewMatchLogEntry {
                player_name: s.player_name.clone(),
                result: MatchResult::Win,
                lp_change,
                total_lp: s.current_lp,
                rank: s.rank,
                division: s.division,
            })
            .await
            .unwrap();
        }
        let ids: Vec<i64> = repo
            .list_logs()
            .await
            .unwrap()
            .iter()
            .map(|l| l.id.0)
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_record_match_applies_to_current_standing() {
        let repo = InMemoryLadderRepository::new();
        repo.create_standing(standing("Ruler")).await.unwrap();
        for _ in 0..2 {
            repo.record_match("Ruler", |s| NewMatchLogEntry {
                result: MatchResult::Win,
                lp_change: 25,
                total_lp: s.current_lp + 25,
                rank: s.rank,
                division: s.division,
                player_name: s.player_name,
            })
            .await
            .unwrap();
        }
        assert_eq!(repo.get_standing("Ruler").await.unwrap().current_lp, 90);
        assert_eq!(repo.log_count(), 2);
        assert!(matches!(
            repo.record_match("Ghost", |s| NewMatchLogEntry {
                result: MatchResult::Win,
                lp_change: 1,
                total_lp: s.current_lp,
                rank: s.rank,
                division: s.division,
                player_name: s.player_name,
            })
            .await,
            Err(RepoUpdateError::NotFound)
        ));
        assert_eq!(repo.log_count(), 2);
    }

    #[tokio::test]
    async fn test_append_log_requires_player() {
        let repo = InMemoryLadderRepository::new();
        let entry = NewMatchLogEntry {
            player_name: "Ghost".to_string(),
            result: MatchResult::Lose,
            lp_change: 5,
            total_lp: 0,
            rank: Rank::Iron,
            division: Division::IV,
        };
        assert!(repo.append_log(entry).await.is_err());
        assert_eq!(repo.log_count(), 0);
    }
}
