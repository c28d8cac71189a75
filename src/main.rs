use anyhow::Result;
use warp::Filter;

use config::Config;
use controllers::QuizController;
use store::QuizStore;

mod config;
mod controllers;
mod error;
mod filters;
mod handlers;
mod models;
mod replies;
mod routes;
mod store;
mod validators;

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let config = Config::from_env()?;

    let quiz_controller = QuizController::new(QuizStore::new());

    let seed = config::load_seed(&config.quiz_file).await?;
    config::apply_seed(&quiz_controller, seed)?;
    log::info!(
        "{} quizzes loaded from {}",
        quiz_controller.quiz_count(),
        config.quiz_file.display()
    );

    let cors = warp::cors()
        .allow_origin(config.cors_origin.as_str())
        .allow_methods(vec!["GET", "POST"])
        .allow_headers(vec!["Content-Type"]);

    let server = routes::routes(quiz_controller)
        .with(cors)
        .with(warp::log("quiz_api"));

    log::info!("listening on {}", config.bind_addr);
    warp::serve(server).run(config.bind_addr).await;

    Ok(())
}
