use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Debug, Error)]
pub enum LeagueError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },

    /// The league would be left without an administrator.
    #[error("The league has no administrator")]
    NoAdministrator,

    #[error("Trainer {id} not found")]
    TrainerNotFound { id: i64 },

    #[error("Username '{username}' is already taken")]
    UsernameTaken { username: String },

    #[error("Invalid form: {message}")]
    InvalidForm { message: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Localization error: {message}")]
    Localization { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LeagueError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LeagueError::TrainerNotFound { .. } => StatusCode::NOT_FOUND,
            LeagueError::UsernameTaken { .. } | LeagueError::NoAdministrator => {
                StatusCode::CONFLICT
            }
            LeagueError::InvalidForm { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LeagueError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        // Internal details stay in the log.
        let message = if status.is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        (status, message).into_response()
    }
}
