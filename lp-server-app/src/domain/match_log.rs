use std::{fmt, str::FromStr};

use lp_core::{Division, Rank};
use thiserror::Error;

use crate::domain::{RepoError, RepoUpdateError, standing::PlayerStanding};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Win,
    Lose,
}

impl MatchResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Lose => "Lose",
        }
    }

    /// Applies the sign of the result to an LP magnitude.
    pub fn signed(&self, lp_change: u32) -> i64 {
        match self {
            MatchResult::Win => lp_change as i64,
            MatchResult::Lose => -(lp_change as i64),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown match result '{0}'")]
pub struct UnknownMatchResult(pub String);

impl FromStr for MatchResult {
    type Err = UnknownMatchResult;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Win" => Ok(MatchResult::Win),
            "Lose" => Ok(MatchResult::Lose),
            _ => Err(UnknownMatchResult(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MatchLogId(pub i64);

impl fmt::Display for MatchLogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A match log entry before the store has assigned it an id. `total_lp`,
/// `rank` and `division` describe the standing after the match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMatchLogEntry {
    pub player_name: String,
    pub result: MatchResult,
    pub lp_change: u32,
    pub total_lp: i64,
    pub rank: Rank,
    pub division: Division,
}

impl NewMatchLogEntry {
    pub fn standing_after(&self) -> PlayerStanding {
        PlayerStanding {
            player_name: self.player_name.clone(),
            rank: self.rank,
            division: self.division,
            current_lp: self.total_lp,
        }
    }

    pub fn with_id(self, id: MatchLogId) -> MatchLogEntry {
        MatchLogEntry {
            id,
            player_name: self.player_name,
            result: self.result,
            lp_change: self.lp_change,
            total_lp: self.total_lp,
            rank: self.rank,
            division: self.division,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchLogEntry {
    pub id: MatchLogId,
    pub player_name: String,
    pub result: MatchResult,
    pub lp_change: u32,
    pub total_lp: i64,
    pub rank: Rank,
    pub division: Division,
}

impl MatchLogEntry {
    pub fn signed_lp_change(&self) -> i64 {
        self.result.signed(self.lp_change)
    }
}

#[async_trait::async_trait]
pub trait MatchLogRepository {
    /// Appends an entry as-is. The player must exist.
    async fn append_log(&self, entry: NewMatchLogEntry) -> Result<MatchLogId, RepoError>;

    /// Most recent first.
    async fn list_logs(&self) -> Result<Vec<MatchLogEntry>, RepoError>;

    /// Loads the player's standing, hands it to `apply` to derive the
    /// post-match entry, then stores the new standing and appends the entry
    /// in one transaction.
    /// An unknown player yields `NotFound` without writing anything.
    async fn record_match(
        &self,
        player_name: &str,
        apply: impl FnOnce(PlayerStanding) -> NewMatchLogEntry + Send + 'static,
    ) -> Result<MatchLogEntry, RepoUpdateError>;
}
