use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{Quiz, QuizResult};

/// In-memory storage for quizzes and results.
///
/// Clones share the same collections. Every read-modify-write sequence must
/// happen under a single [`QuizStore::lock`] so that answer bookkeeping stays
/// consistent when requests are served concurrently.
#[derive(Clone, Debug, Default)]
pub struct QuizStore {
    collections: Arc<Mutex<Collections>>,
}

#[derive(Debug, Default)]
pub struct Collections {
    quizzes: Vec<Quiz>,
    results: Vec<QuizResult>,
}

impl QuizStore {
    pub fn new() -> QuizStore {
        QuizStore::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, Collections> {
        // No critical section can leave the collections half-written, so a
        // poisoned lock is still safe to use.
        self.collections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Collections {
    pub fn push_quiz(&mut self, quiz: Quiz) {
        self.quizzes.push(quiz);
    }

    pub fn quiz(&self, id: &str) -> Option<&Quiz> {
        self.quizzes.iter().find(|quiz| quiz.id == id)
    }

    pub fn result(&self, quiz_id: &str, user_id: &str) -> Option<&QuizResult> {
        self.results
            .iter()
            .find(|result| result.quiz_id == quiz_id && result.user_id == user_id)
    }

    /// Returns the result for `(quiz_id, user_id)`, creating an empty one
    /// if the user has not answered anything in that quiz yet.
    pub fn result_entry(&mut self, quiz_id: &str, user_id: &str) -> &mut QuizResult {
        let index = self
            .results
            .iter()
            .position(|result| result.quiz_id == quiz_id && result.user_id == user_id);

        let index = match index {
            Some(index) => index,
            None => {
                self.results.push(QuizResult {
                    quiz_id: quiz_id.into(),
                    user_id: user_id.into(),
                    score: 0,
                    answers: Vec::new(),
                });
                self.results.len() - 1
            }
        };

        &mut self.results[index]
    }

    pub fn quiz_count(&self) -> usize {
        self.quizzes.len()
    }
}
