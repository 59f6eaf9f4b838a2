use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    TeamNotFound { id: u32 },
    PlayerNotFound { id: u32 },
    GameNotFound { id: u32 },
    NotFound { resource: String, identifier: String },
    Unauthorized { msg: String },
    ValidationError { msg: String, field: Option<String> },
    RateLimit { msg: String },
    ServerError { msg: String },
    ConfigError { msg: String },
    UnknownError { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Resources that have a dedicated not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Team,
    Player,
    Game,
}

impl AppError {
    /// Stable machine-readable code, safe to expose to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::TeamNotFound { .. } => "TEAM_NOT_FOUND",
            AppError::PlayerNotFound { .. } => "PLAYER_NOT_FOUND",
            AppError::GameNotFound { .. } => "GAME_NOT_FOUND",
            AppError::NotFound { .. } => "NOT_FOUND",
            AppError::Unauthorized { .. } => "UNAUTHORIZED",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::RateLimit { .. } => "RATE_LIMIT_EXCEEDED",
            AppError::ServerError { .. } => "SERVER_ERROR",
            AppError::ConfigError { .. } => "CONFIG_ERROR",
            AppError::UnknownError { .. } => "UNKNOWN_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::TeamNotFound { .. }
                | AppError::PlayerNotFound { .. }
                | AppError::GameNotFound { .. }
                | AppError::NotFound { .. }
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::TeamNotFound { .. }
            | AppError::PlayerNotFound { .. }
            | AppError::GameNotFound { .. }
            | AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::RateLimit { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::ServerError { .. } => StatusCode::BAD_GATEWAY,
            AppError::ConfigError { .. } | AppError::UnknownError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Build the not-found error matching the resource that was looked up.
pub fn map_not_found_error(resource: ResourceKind, id: u32) -> AppError {
    match resource {
        ResourceKind::Team => AppError::TeamNotFound { id },
        ResourceKind::Player => AppError::PlayerNotFound { id },
        ResourceKind::Game => AppError::GameNotFound { id },
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::TeamNotFound { id } => write!(f, "Team with ID {} not found", id),
            AppError::PlayerNotFound { id } => write!(f, "Player with ID {} not found", id),
            AppError::GameNotFound { id } => write!(f, "Game with ID {} not found", id),
            AppError::NotFound {
                resource,
                identifier,
            } => write!(f, "{} with identifier {} not found", resource, identifier),
            AppError::Unauthorized { msg } => write!(f, "Unauthorized: '{}'", msg),
            AppError::ValidationError { msg, field } => match field {
                Some(field) => write!(f, "Validation Error on '{}': '{}'", field, msg),
                None => write!(f, "Validation Error: '{}'", msg),
            },
            AppError::RateLimit { msg } => write!(f, "Rate Limit Error: '{}'", msg),
            AppError::ServerError { msg } => write!(f, "Server Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Configuration Error: '{}'", msg),
            AppError::UnknownError { msg } => write!(f, "Unknown Error: '{}'", msg),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
