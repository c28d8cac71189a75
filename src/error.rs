use thiserror::Error;
use warp::{http::StatusCode, reject::Reject};

/// Failure kinds of the quiz service and its request validation.
///
/// The `Display` output is the message sent to clients.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QuizError {
    #[error("{0}")]
    Validation(String),

    #[error("quiz not found")]
    QuizNotFound,

    #[error("question not found")]
    QuestionNotFound,

    #[error("answer already exists")]
    AnswerAlreadyExists,

    #[error("result not found")]
    ResultNotFound,
}

impl QuizError {
    /// Status used when the error is raised out of a handler.
    ///
    /// Service errors carry no status of their own and fall back to 500.
    /// Lookups that find nothing are answered with 404 by the routes directly.
    pub fn status(&self) -> StatusCode {
        match self {
            QuizError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Reject for QuizError {}
