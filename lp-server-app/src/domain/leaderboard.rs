use std::collections::HashMap;

use lp_core::{Division, Rank};

use crate::domain::{format_lp_delta, match_log::MatchLogEntry, standing::PlayerStanding};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub player_name: String,
    pub total_lp_change: i64,
    /// `total_lp_change` as displayed, `+N` for gains.
    pub lp_gained_lost: String,
    pub total_games_played: u32,
    pub current_lp: i64,
    pub rank: Rank,
    pub division: Division,
    /// 1-based, distinct even when totals tie.
    pub position: usize,
}

/// Ranks every player by net LP change over their logged matches.
///
/// `standings` must be in registration order: players with equal totals keep
/// that relative order and still get distinct, consecutive positions.
/// Players without logs appear with a total of 0.
pub fn build_leaderboard(
    standings: Vec<PlayerStanding>,
    logs: &[MatchLogEntry],
) -> Vec<LeaderboardRow> {
    let mut totals: HashMap<&str, (i64, u32)> = HashMap::new();
    for log in logs {
        let entry = totals.entry(log.player_name.as_str()).or_insert((0, 0));
        entry.0 += log.signed_lp_change();
        entry.1 += 1;
    }

    let mut rows: Vec<LeaderboardRow> = standings
        .into_iter()
        .map(|standing| {
            let (total_lp_change, total_games_played) = totals
                .get(standing.player_name.as_str())
                .copied()
                .unwrap_or((0, 0));
            LeaderboardRow {
                lp_gained_lost: format_lp_delta(total_lp_change),
                player_name: standing.player_name,
                total_lp_change,
                total_games_played,
                current_lp: standing.current_lp,
                rank: standing.rank,
                division: standing.division,
                position: 0,
            }
        })
        .collect();

    // stable sort, ties stay in encounter order
    rows.sort_by(|a, b| b.total_lp_change.cmp(&a.total_lp_change));
    for (i, row) in rows.iter_mut().enumerate() {
        row.position = i + 1;
    }
    rows
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Podium {
    pub first: Option<LeaderboardRow>,
    pub second: Option<LeaderboardRow>,
    pub third: Option<LeaderboardRow>,
}

impl Podium {
    pub fn from_leaderboard(rows: &[LeaderboardRow]) -> Self {
        let mut top = rows.iter().take(3).cloned();
        Self {
            first: top.next(),
            second: top.next(),
            third: top.next(),
        }
    }

    pub fn len(&self) -> usize {
        [&self.first, &self.second, &self.third]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}
