use lp_core::LadderPolicy;

use crate::domain::{
    match_log::{MatchResult, NewMatchLogEntry},
    standing::PlayerStanding,
};

pub trait ProgressionService {
    fn apply_match(
        &self,
        standing: &PlayerStanding,
        result: MatchResult,
        lp_change: u32,
    ) -> NewMatchLogEntry;
}

pub struct ProgressionServiceImpl {
    policy: LadderPolicy,
}

impl ProgressionServiceImpl {
    pub fn new(policy: LadderPolicy) -> Self {
        Self { policy }
    }
}

impl ProgressionService for ProgressionServiceImpl {
    fn apply_match(
        &self,
        standing: &PlayerStanding,
        result: MatchResult,
        lp_change: u32,
    ) -> NewMatchLogEntry {
        let absolute_lp = standing.current_lp + result.signed(lp_change);
        let position =
            lp_core::advance_with(self.policy, standing.rank, standing.division, absolute_lp);

        NewMatchLogEntry {
            player_name: standing.player_name.clone(),
            result,
            lp_change,
            total_lp: position.lp,
            rank: position.rank,
            division: position.division,
        }
    }
}
