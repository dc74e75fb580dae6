use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use lp_server_app::domain::match_log::{MatchLogEntry, MatchResult};

use crate::{app::ServiceError, http::AppState};

#[derive(serde::Deserialize)]
pub struct JsonLogMatchRequest {
    player_name: String,
    result: String,
    lp_change: Option<u32>,
}

#[derive(serde::Serialize, Clone)]
pub struct JsonMatchLogResponse {
    id: i64,
    player_name: String,
    result: String,
    lp_change: u32,
    total_lp: i64,
    rank: String,
    division: String,
}

impl From<MatchLogEntry> for JsonMatchLogResponse {
    fn from(entry: MatchLogEntry) -> Self {
        Self {
            id: entry.id.0,
            player_name: entry.player_name,
            result: entry.result.to_string(),
            lp_change: entry.lp_change,
            total_lp: entry.total_lp,
            rank: entry.rank.to_string(),
            division: entry.division.to_string(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct JsonMatchStatisticsResponse {
    logs: Vec<JsonMatchLogResponse>,
    total_lp_change: i64,
    total_lp_change_display: String,
}

pub async fn log_match(
    State(app_state): State<AppState>,
    payload: Result<Json<JsonLogMatchRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonMatchLogResponse>), ServiceError> {
    let Json(request) = payload?;
    let result: MatchResult = request.result.parse()?;
    let entry = app_state
        .app
        .match_log_use_case
        .log_match(&request.player_name, result, request.lp_change)
        .await?;
    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn get_statistics(
    State(app_state): State<AppState>,
) -> Result<Json<JsonMatchStatisticsResponse>, ServiceError> {
    let view = app_state
        .app
        .match_statistics_use_case
        .get_statistics()
        .await?;
    Ok(Json(JsonMatchStatisticsResponse {
        logs: view.logs.into_iter().map(Into::into).collect(),
        total_lp_change: view.total_lp_change,
        total_lp_change_display: view.total_lp_change_display,
    }))
}
