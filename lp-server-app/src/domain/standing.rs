use lp_core::{Division, LadderPosition, Rank};
use validator::Validate;

use crate::domain::{RepoCreateError, RepoError, RepoRetrieveError, RepoUpdateError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerStanding {
    pub player_name: String,
    pub rank: Rank,
    pub division: Division,
    pub current_lp: i64,
}

impl PlayerStanding {
    pub fn new(player_name: impl Into<String>, position: LadderPosition) -> Self {
        Self {
            player_name: player_name.into(),
            rank: position.rank,
            division: position.division,
            current_lp: position.lp,
        }
    }

    pub fn position(&self) -> LadderPosition {
        LadderPosition {
            rank: self.rank,
            division: self.division,
            lp: self.current_lp,
        }
    }
}

#[async_trait::async_trait]
pub trait StandingRepository {
    async fn create_standing(&self, standing: PlayerStanding) -> Result<(), RepoCreateError>;
    async fn get_standing(&self, player_name: &str) -> Result<PlayerStanding, RepoRetrieveError>;
    async fn update_standing(&self, standing: &PlayerStanding) -> Result<(), RepoUpdateError>;
    async fn list_player_names(&self) -> Result<Vec<String>, RepoError>;
    /// All standings in registration order.
    async fn list_standings(&self) -> Result<Vec<PlayerStanding>, RepoError>;
}

#[derive(Validate)]
struct PlayerNameValidator {
    #[validate(length(min = 1, max = 64))]
    name: String,
}

/// Trims the name and checks its length. Returns the name as it will be stored.
pub fn validate_player_name(name: &str) -> Result<String, String> {
    let validator = PlayerNameValidator {
        name: name.trim().to_string(),
    };
    if let Err(e) = validator.validate() {
        return Err(format!("Invalid player name: {}", e));
    }
    Ok(validator.name)
}
