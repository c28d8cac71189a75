use serde::de::DeserializeOwned;
use warp::Filter;

use crate::controllers::QuizController;

pub const MAX_BODY_BYTES: u64 = 100 * 1024;

pub fn with_quiz_controller(
    quiz_controller: QuizController,
) -> impl Filter<Extract = (QuizController,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || quiz_controller.clone())
}

/// JSON body of at most [`MAX_BODY_BYTES`].
///
/// The limit is checked against `Content-Length`, so chunked bodies without
/// that header are refused with 411.
pub fn json_body<T>() -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone
where
    T: DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}
