use axum::{extract::rejection::JsonRejection, response::IntoResponse};
use lp_core::InvalidLadderPosition;
use lp_server_app::{
    domain::match_log::UnknownMatchResult,
    workflow::{
        leaderboard::LeaderboardError,
        matches::{log_match::LogMatchError, statistics::MatchStatisticsError},
        player::{
            get_standing::GetStandingError, list::ListPlayersError,
            register::RegisterPlayerError, update_standing::UpdateStandingError,
        },
    },
};

#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, msg) = match self {
            ServiceError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            ServiceError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ServiceError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg),
            ServiceError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(value: JsonRejection) -> Self {
        ServiceError::BadRequest(value.body_text())
    }
}

impl From<InvalidLadderPosition> for ServiceError {
    fn from(value: InvalidLadderPosition) -> Self {
        ServiceError::BadRequest(value.to_string())
    }
}

impl From<UnknownMatchResult> for ServiceError {
    fn from(value: UnknownMatchResult) -> Self {
        ServiceError::BadRequest(value.to_string())
    }
}

impl From<RegisterPlayerError> for ServiceError {
    fn from(value: RegisterPlayerError) -> Self {
        match value {
            RegisterPlayerError::InvalidName(_) | RegisterPlayerError::InvalidLadderPosition(_) => {
                ServiceError::BadRequest(value.to_string())
            }
            RegisterPlayerError::AlreadyExists(_) => ServiceError::Conflict(value.to_string()),
            RegisterPlayerError::Internal => ServiceError::Internal(value.to_string()),
        }
    }
}

impl From<GetStandingError> for ServiceError {
    fn from(value: GetStandingError) -> Self {
        match value {
            GetStandingError::NotFound(_) => ServiceError::NotFound(value.to_string()),
            GetStandingError::Internal => ServiceError::Internal(value.to_string()),
        }
    }
}

impl From<UpdateStandingError> for ServiceError {
    fn from(value: UpdateStandingError) -> Self {
        match value {
            UpdateStandingError::NotFound(_) => ServiceError::NotFound(value.to_string()),
            UpdateStandingError::InvalidLadderPosition(_) => {
                ServiceError::BadRequest(value.to_string())
            }
            UpdateStandingError::Internal => ServiceError::Internal(value.to_string()),
        }
    }
}

impl From<ListPlayersError> for ServiceError {
    fn from(value: ListPlayersError) -> Self {
        ServiceError::Internal(value.to_string())
    }
}

impl From<LogMatchError> for ServiceError {
    fn from(value: LogMatchError) -> Self {
        match value {
            LogMatchError::PlayerNotFound(_) => ServiceError::NotFound(value.to_string()),
            LogMatchError::Internal => ServiceError::Internal(value.to_string()),
        }
    }
}

impl From<MatchStatisticsError> for ServiceError {
    fn from(value: MatchStatisticsError) -> Self {
        ServiceError::Internal(value.to_string())
    }
}

impl From<LeaderboardError> for ServiceError {
    fn from(value: LeaderboardError) -> Self {
        ServiceError::Internal(value.to_string())
    }
}
