use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::error;

use crate::models::response::ApiResponse;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SurrealDb Error: {0}")]
    SurrealError(#[from] surrealdb::Error),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Json web token Error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Json Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Visitor not found")]
    VisitorNotFound,
    #[error("Worker not found")]
    WorkerNotFound,
    #[error("Worker record not found")]
    WorkerRecordNotFound,
    #[error("No registration record found")]
    NoRegistrationRecord,
    #[error("Notification not found")]
    NotificationNotFound,

    // Negative verdict from the identity oracle; carries its message verbatim.
    #[error("{0}")]
    VerificationFailed(String),
    #[error("Invalid ID scanned. Please use your registered Worker ID.")]
    InvalidGateToken,

    #[error("unknown Error")]
    Unknown,

    // ! Auth
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid authorization token")]
    InvalidToken,
    #[error("Invalid authorization scheme")]
    InvalidScheme,
    #[error("Token expired")]
    TokenExpired,
    #[error("You are not authorized to perform this action")]
    Forbidden,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::SurrealError(error) => {
                error!("Surreal Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::JwtError(error) => {
                error!("JWT Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                error!("Validation Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumJsonRejection(error) => {
                error!("Axum Json Rejection Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            Error::VisitorNotFound => (StatusCode::NOT_FOUND, "Visitor not found".to_string()),
            Error::WorkerNotFound => (StatusCode::NOT_FOUND, "Worker not found".to_string()),
            Error::WorkerRecordNotFound => {
                (StatusCode::NOT_FOUND, "Worker record not found".to_string())
            }
            Error::NoRegistrationRecord => (
                StatusCode::NOT_FOUND,
                "No registration record found".to_string(),
            ),
            Error::NotificationNotFound => {
                (StatusCode::NOT_FOUND, "Notification not found".to_string())
            }
            Error::VerificationFailed(message) => (StatusCode::BAD_REQUEST, message),
            Error::InvalidGateToken => (
                StatusCode::BAD_REQUEST,
                "Invalid ID scanned. Please use your registered Worker ID.".to_string(),
            ),
            Error::Unknown => (StatusCode::BAD_REQUEST, "Unknown".to_string()),
            Error::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing authorization token".to_string(),
            ),
            Error::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization token".to_string(),
            ),
            Error::InvalidScheme => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization scheme".to_string(),
            ),
            Error::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired".to_string()),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "You are not authorized to perform this action".to_string(),
            ),
        };
        (status, Json(ApiResponse::error(message))).into_response()
    }
}
