use std::{convert::Infallible, error::Error};

use percent_encoding::percent_decode_str;
use warp::{body::BodyDeserializeError, http::StatusCode, reject, reply::Response, Rejection};

use crate::controllers::QuizController;
use crate::error::QuizError;
use crate::models::{CreateQuizRequest, QuizView, SubmitAnswerRequest};
use crate::replies::{self, ErrorReply, MessageReply};
use crate::validators;

pub async fn create_quiz(
    request: CreateQuizRequest,
    quiz_controller: QuizController,
) -> Result<Response, Rejection> {
    let (title, questions) = validators::create_quiz(request).map_err(reject::custom)?;
    let quiz = quiz_controller.create_quiz(title, questions);

    Ok(replies::success(StatusCode::CREATED, &quiz))
}

pub async fn get_quiz(id: String, quiz_controller: QuizController) -> Result<Response, Rejection> {
    let id = path_param(&id, "id")?;

    match quiz_controller.get_quiz(&id) {
        None => Ok(not_found(QuizError::QuizNotFound)),
        Some(quiz) => Ok(replies::success(StatusCode::OK, &QuizView::from(quiz))),
    }
}

pub async fn submit_answer(
    user_id: String,
    request: SubmitAnswerRequest,
    quiz_controller: QuizController,
) -> Result<Response, Rejection> {
    let user_id = path_param(&user_id, "userId")?;
    let submission = validators::submit_answer(request).map_err(reject::custom)?;

    let outcome = quiz_controller
        .submit_answer(
            &submission.quiz_id,
            &user_id,
            &submission.question_id,
            submission.selected_option,
        )
        .map_err(|err| {
            log::warn!(
                "rejected answer from {} to question {}: {}",
                user_id,
                submission.question_id,
                err
            );
            reject::custom(err)
        })?;

    Ok(replies::success(StatusCode::OK, &outcome))
}

pub async fn get_results(
    quiz_id: String,
    user_id: String,
    quiz_controller: QuizController,
) -> Result<Response, Rejection> {
    let quiz_id = path_param(&quiz_id, "quizId")?;
    let user_id = path_param(&user_id, "userId")?;

    match quiz_controller.get_results(&quiz_id, &user_id) {
        None => Ok(not_found(QuizError::ResultNotFound)),
        Some(result) => Ok(replies::success(StatusCode::OK, &result)),
    }
}

/// Turns every rejection into an enveloped error reply.
pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let (status, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not found".to_string())
    } else if let Some(err) = err.find::<QuizError>() {
        (err.status(), validators::clean_message(&err.to_string()))
    } else if let Some(err) = err.find::<BodyDeserializeError>() {
        let message = err
            .source()
            .map(|source| source.to_string())
            .unwrap_or_else(|| err.to_string());
        (StatusCode::BAD_REQUEST, validators::clean_message(&message))
    } else if err.find::<reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "payload too large".to_string())
    } else if err.find::<reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "length required".to_string())
    } else if err.find::<reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "unsupported media type".to_string(),
        )
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method not allowed".to_string())
    } else {
        log::error!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal server error".to_string(),
        )
    };

    Ok(replies::failure(status, &ErrorReply::new(message)))
}

/// Path segments arrive percent-encoded; ids are matched on the decoded text.
fn path_param(raw: &str, name: &str) -> Result<String, Rejection> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_err| {
            reject::custom(QuizError::Validation(format!(
                "{} must be a valid UTF-8 string",
                name
            )))
        })
}

fn not_found(err: QuizError) -> Response {
    replies::failure(
        StatusCode::NOT_FOUND,
        &MessageReply {
            message: err.to_string(),
        },
    )
}
