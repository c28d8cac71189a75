use anyhow::{anyhow, Error, Result};
use std::{
    env, io,
    net::SocketAddr,
    path::{Path, PathBuf},
};
use tokio::fs;

use crate::controllers::QuizController;
use crate::models::SeedFile;
use crate::validators;

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub quiz_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let bind_addr = env::var("BIND").unwrap_or_else(|_err| "127.0.0.1:3000".into());
        let bind_addr = bind_addr.parse()?;

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_err| "http://localhost:1313".into());

        let quiz_file = env::var("QUIZ_FILE").unwrap_or_else(|_err| "quiz.toml".into());

        Ok(Config {
            bind_addr,
            cors_origin,
            quiz_file: quiz_file.into(),
        })
    }
}

/// Reads the seed file, if there is one. A missing file means no seed.
pub async fn load_seed(path: impl AsRef<Path>) -> Result<SeedFile> {
    let path = path.as_ref();
    match fs::read_to_string(path).await {
        Ok(seed) => parse_seed(&seed),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SeedFile::default()),
        Err(err) => Err(Error::new(err).context(format!("couldn't read {}", path.display()))),
    }
}

pub fn parse_seed(seed: &str) -> Result<SeedFile> {
    let seed = toml::de::from_str(seed)?;
    Ok(seed)
}

/// Creates every quiz from the seed through the regular service path.
pub fn apply_seed(quiz_controller: &QuizController, seed: SeedFile) -> Result<()> {
    for quiz in seed.quiz {
        let title = quiz.title.clone();
        let (title, questions) = validators::seed_quiz(quiz)
            .map_err(|err| anyhow!("invalid seeded quiz {:?}: {}", title, err))?;

        let quiz = quiz_controller.create_quiz(title, questions);
        log::info!("seeded quiz {:?} as {}", quiz.title, quiz.id);
    }

    Ok(())
}
