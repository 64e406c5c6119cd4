use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;

/// Uniform wording for both unknown email and wrong password.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    ConfigurationError(String),

    #[error("Unparsable collaborator reply: {0}")]
    CollaboratorProtocol(String),

    #[error("Collaborator call failed: {0}")]
    CollaboratorError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database is not configured")]
    DatabaseUnavailable,

    #[error("Internal server error: {0}")]
    InternalError(String),

    /// A 500 whose message is already fit for clients; details were logged.
    #[error("{0}")]
    ServerError(String),
}

impl AppError {
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Message safe to hand back to the client.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(_)
            | AppError::AlreadyExists(_)
            | AppError::InvalidCredentials
            | AppError::ConfigurationError(_)
            | AppError::ServerError(_) => self.to_string(),
            AppError::Unauthorized(_) => "Invalid or expired token.".to_string(),
            AppError::CollaboratorProtocol(_) => "Invalid response from AI evaluation.".to_string(),
            AppError::CollaboratorError(_) => "Failed to evaluate answer.".to_string(),
            AppError::DatabaseError(_) | AppError::DatabaseUnavailable => {
                "Database is currently unavailable.".to_string()
            }
            AppError::InternalError(_) => "Internal server error.".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::AlreadyExists(_)
            | AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::ConfigurationError(_)
            | AppError::CollaboratorProtocol(_)
            | AppError::CollaboratorError(_)
            | AppError::DatabaseError(_)
            | AppError::DatabaseUnavailable
            | AppError::InternalError(_)
            | AppError::ServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.public_message(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(format!("I/O error: {}", err))
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("Invalid upload: {}", err))
    }
}

/// True when the store rejected a write because of a unique index.
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AlreadyExists("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ConfigurationError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::CollaboratorProtocol("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::DatabaseUnavailable.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let err = AppError::ValidationError("Missing result fields.".into());
        assert_eq!(err.public_message(), "Missing result fields.");
        assert_eq!(AppError::InvalidCredentials.public_message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[test]
    fn test_server_errors_hide_details() {
        let err = AppError::DatabaseError("connection refused on 10.0.0.3".into());
        assert!(!err.public_message().contains("10.0.0.3"));

        let err = AppError::CollaboratorProtocol("not json".into());
        assert_eq!(err.public_message(), "Invalid response from AI evaluation.");
    }

    #[test]
    fn test_server_error_renders_its_own_message() {
        let err = AppError::ServerError("Server error during login.".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Server error during login.");
    }
}
