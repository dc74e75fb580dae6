use axum::{Json, extract::State};
use lp_server_app::domain::leaderboard::LeaderboardRow;

use crate::{app::ServiceError, http::AppState};

#[derive(serde::Serialize, Clone)]
pub struct JsonLeaderboardRow {
    position: usize,
    player_name: String,
    lp_gained_lost: String,
    total_lp_change: i64,
    total_games_played: u32,
    current_lp: i64,
    rank: String,
    division: String,
}

impl From<LeaderboardRow> for JsonLeaderboardRow {
    fn from(row: LeaderboardRow) -> Self {
        Self {
            position: row.position,
            player_name: row.player_name,
            lp_gained_lost: row.lp_gained_lost,
            total_lp_change: row.total_lp_change,
            total_games_played: row.total_games_played,
            current_lp: row.current_lp,
            rank: row.rank.to_string(),
            division: row.division.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct JsonPodium {
    first: Option<JsonLeaderboardRow>,
    second: Option<JsonLeaderboardRow>,
    third: Option<JsonLeaderboardRow>,
}

#[derive(serde::Serialize)]
pub struct JsonLeaderboardResponse {
    rows: Vec<JsonLeaderboardRow>,
    podium: JsonPodium,
}

pub async fn get_leaderboard(
    State(app_state): State<AppState>,
) -> Result<Json<JsonLeaderboardResponse>, ServiceError> {
    let view = app_state.app.leaderboard_use_case.build_leaderboard().await?;
    Ok(Json(JsonLeaderboardResponse {
        rows: view.rows.into_iter().map(Into::into).collect(),
        podium: JsonPodium {
            first: view.podium.first.map(Into::into),
            second: view.podium.second.map(Into::into),
            third: view.podium.third.map(Into::into),
        },
    }))
}
