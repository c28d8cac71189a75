use warp::{Filter, Reply};

use crate::controllers::QuizController;
use crate::filters;
use crate::handlers;

/// All quiz endpoints under `/api`, with rejections already recovered.
pub fn routes(
    quiz_controller: QuizController,
) -> impl Filter<Extract = (impl Reply,), Error = std::convert::Infallible> + Clone {
    let create_quiz = warp::path!("api" / "quiz")
        .and(warp::post())
        .and(filters::json_body())
        .and(filters::with_quiz_controller(quiz_controller.clone()))
        .and_then(handlers::create_quiz);

    let get_quiz = warp::path!("api" / "quiz" / String)
        .and(warp::get())
        .and(filters::with_quiz_controller(quiz_controller.clone()))
        .and_then(handlers::get_quiz);

    let submit_answer = warp::path!("api" / "quiz" / "answer" / String)
        .and(warp::post())
        .and(filters::json_body())
        .and(filters::with_quiz_controller(quiz_controller.clone()))
        .and_then(handlers::submit_answer);

    let get_results = warp::path!("api" / "quiz" / String / "results" / String)
        .and(warp::get())
        .and(filters::with_quiz_controller(quiz_controller))
        .and_then(handlers::get_results);

    create_quiz
        .or(get_quiz)
        .or(submit_answer)
        .or(get_results)
        .recover(handlers::handle_rejection)
}
