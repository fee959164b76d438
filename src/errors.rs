use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Quiz not found: {0}")]
    QuizNotFound(i64),

    #[error("Incomplete submission: no response for questions {0:?}")]
    IncompleteSubmission(Vec<i64>),

    #[error("Quiz {0} has no questions")]
    EmptyQuiz(i64),

    #[error("Failed to record quiz completion: {0}")]
    CompletionRecordFailed(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_responses: Option<Vec<i64>>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::QuizNotFound(_) => StatusCode::NOT_FOUND,
            AppError::IncompleteSubmission(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EmptyQuiz(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::CompletionRecordFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        }

        let missing_responses = match self {
            AppError::IncompleteSubmission(missing) => Some(missing.clone()),
            _ => None,
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
            missing_responses,
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

pub type AppResult<T> = Result<T, AppError>;
