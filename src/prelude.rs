use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid job ID")]
    InvalidJobId,
    #[error("Job not found")]
    JobNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid job data")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    MalformedBody(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJobId | Error::Validation(_) | Error::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::JobNotFound => StatusCode::NOT_FOUND,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // internals never reach the client, only the log line does
    fn public_message(&self) -> String {
        match self {
            Error::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<ValidationErrors>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let message = self.public_message();
        let errors = match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        };
        (status, Json(ErrorBody { message, errors })).into_response()
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Error::Internal(value.to_string())
    }
}
