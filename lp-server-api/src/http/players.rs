use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use lp_core::{Division, Rank};
use lp_server_app::domain::standing::PlayerStanding;

use crate::{app::ServiceError, http::AppState};

#[derive(serde::Deserialize)]
pub struct JsonRegisterPlayerRequest {
    player_name: String,
    rank: String,
    division: String,
    current_lp: u32,
}

#[derive(serde::Deserialize)]
pub struct JsonUpdateStandingRequest {
    rank: String,
    division: String,
    current_lp: u32,
}

#[derive(serde::Serialize, Clone)]
pub struct JsonStandingResponse {
    player_name: String,
    rank: String,
    division: String,
    current_lp: i64,
}

impl From<PlayerStanding> for JsonStandingResponse {
    fn from(standing: PlayerStanding) -> Self {
        Self {
            player_name: standing.player_name,
            rank: standing.rank.to_string(),
            division: standing.division.to_string(),
            current_lp: standing.current_lp,
        }
    }
}

pub async fn register_player(
    State(app_state): State<AppState>,
    payload: Result<Json<JsonRegisterPlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<JsonStandingResponse>), ServiceError> {
    let Json(request) = payload?;
    let rank: Rank = request.rank.parse()?;
    let division: Division = request.division.parse()?;
    let standing = app_state
        .app
        .player_register_use_case
        .register(&request.player_name, rank, division, request.current_lp)
        .await?;
    Ok((StatusCode::CREATED, Json(standing.into())))
}

pub async fn list_players(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<String>>, ServiceError> {
    let names = app_state.app.player_list_use_case.list_players().await?;
    Ok(Json(names))
}

pub async fn get_standing(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<JsonStandingResponse>, ServiceError> {
    let standing = app_state
        .app
        .player_get_standing_use_case
        .get_standing(&name)
        .await?;
    Ok(Json(standing.into()))
}

pub async fn update_standing(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
    payload: Result<Json<JsonUpdateStandingRequest>, JsonRejection>,
) -> Result<Json<JsonStandingResponse>, ServiceError> {
    let Json(request) = payload?;
    let rank: Rank = request.rank.parse()?;
    let division: Division = request.division.parse()?;
    let standing = app_state
        .app
        .player_update_standing_use_case
        .update_standing(&name, rank, division, request.current_lp)
        .await?;
    Ok(Json(standing.into()))
}
