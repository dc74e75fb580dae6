use std::sync::Arc;

use lp_core::LadderPolicy;

use crate::{
    domain::{
        match_log::MatchLogRepository, progression::ProgressionServiceImpl,
        standing::StandingRepository,
    },
    workflow::{
        leaderboard::{LeaderboardUseCase, LeaderboardUseCaseImpl},
        matches::{
            log_match::{LogMatchUseCase, LogMatchUseCaseImpl},
            statistics::{MatchStatisticsUseCase, MatchStatisticsUseCaseImpl},
        },
        player::{
            get_standing::{GetStandingUseCase, GetStandingUseCaseImpl},
            list::{ListPlayersUseCase, ListPlayersUseCaseImpl},
            register::{RegisterPlayerUseCase, RegisterPlayerUseCaseImpl},
            update_standing::{UpdateStandingUseCase, UpdateStandingUseCaseImpl},
        },
    },
};

pub mod domain;
pub mod workflow;

pub struct Application {
    pub player_register_use_case: Box<dyn RegisterPlayerUseCase + Send + Sync + 'static>,
    pub player_get_standing_use_case: Box<dyn GetStandingUseCase + Send + Sync + 'static>,
    pub player_update_standing_use_case: Box<dyn UpdateStandingUseCase + Send + Sync + 'static>,
    pub player_list_use_case: Box<dyn ListPlayersUseCase + Send + Sync + 'static>,

    pub match_log_use_case: Box<dyn LogMatchUseCase + Send + Sync + 'static>,
    pub match_statistics_use_case: Box<dyn MatchStatisticsUseCase + Send + Sync + 'static>,

    pub leaderboard_use_case: Box<dyn LeaderboardUseCase + Send + Sync + 'static>,
}

pub fn build_application<
    S: StandingRepository + Send + Sync + 'static,
    L: MatchLogRepository + Send + Sync + 'static,
>(
    standing_repository: Arc<S>,
    match_log_repository: Arc<L>,
    policy: LadderPolicy,
) -> Application {
    let progression_service = Arc::new(ProgressionServiceImpl::new(policy));

    Application {
        player_register_use_case: Box::new(RegisterPlayerUseCaseImpl::new(
            standing_repository.clone(),
        )),
        player_get_standing_use_case: Box::new(GetStandingUseCaseImpl::new(
            standing_repository.clone(),
        )),
        player_update_standing_use_case: Box::new(UpdateStandingUseCaseImpl::new(
            standing_repository.clone(),
        )),
        player_list_use_case: Box::new(ListPlayersUseCaseImpl::new(standing_repository.clone())),
        match_log_use_case: Box::new(LogMatchUseCaseImpl::new(
            match_log_repository.clone(),
            progression_service,
        )),
        match_statistics_use_case: Box::new(MatchStatisticsUseCaseImpl::new(
            match_log_repository.clone(),
        )),
        leaderboard_use_case: Box::new(LeaderboardUseCaseImpl::new(
            standing_repository,
            match_log_repository,
        )),
    }
}
