use uuid::Uuid;

use crate::error::QuizError;
use crate::models::{Answer, AnswerOutcome, NewQuestion, Question, Quiz, QuizResult};
use crate::store::QuizStore;

#[derive(Clone, Debug)]
pub struct QuizController {
    store: QuizStore,
}

impl QuizController {
    pub fn new(store: QuizStore) -> QuizController {
        QuizController { store }
    }

    pub fn create_quiz(&self, title: String, questions: Vec<NewQuestion>) -> Quiz {
        let questions = questions
            .into_iter()
            .map(|question| Question {
                id: generate_id(),
                text: question.text,
                options: question.options,
                correct_option: question.correct_option,
            })
            .collect();

        let quiz = Quiz {
            id: generate_id(),
            title,
            questions,
        };

        self.store.lock().push_quiz(quiz.clone());
        log::debug!(
            "created quiz {} with {} questions",
            quiz.id,
            quiz.questions.len()
        );

        quiz
    }

    /// Returns the full quiz, correct options included.
    pub fn get_quiz(&self, id: &str) -> Option<Quiz> {
        self.store.lock().quiz(id).cloned()
    }

    /// Records a user's answer to one question and scores it.
    ///
    /// Each question can be answered once per user; a second attempt fails
    /// with [`QuizError::AnswerAlreadyExists`] and leaves the result as it was.
    pub fn submit_answer(
        &self,
        quiz_id: &str,
        user_id: &str,
        question_id: &str,
        selected_option: i64,
    ) -> Result<AnswerOutcome, QuizError> {
        let mut collections = self.store.lock();

        let quiz = collections.quiz(quiz_id).ok_or(QuizError::QuizNotFound)?;
        let question = quiz
            .questions
            .iter()
            .find(|question| question.id == question_id)
            .ok_or(QuizError::QuestionNotFound)?;

        let correct_option = question.correct_option;
        let is_correct = selected_option == correct_option;

        let result = collections.result_entry(quiz_id, user_id);
        if result
            .answers
            .iter()
            .any(|answer| answer.question_id == question_id)
        {
            return Err(QuizError::AnswerAlreadyExists);
        }

        result.answers.push(Answer {
            question_id: question_id.into(),
            selected_option,
            is_correct,
        });
        if is_correct {
            result.score += 1;
        }

        log::debug!(
            "user {} answered question {} of quiz {}: correct={}",
            user_id,
            question_id,
            quiz_id,
            is_correct
        );

        Ok(AnswerOutcome {
            is_correct,
            correct_option: if is_correct { None } else { Some(correct_option) },
        })
    }

    pub fn get_results(&self, quiz_id: &str, user_id: &str) -> Option<QuizResult> {
        self.store.lock().result(quiz_id, user_id).cloned()
    }

    pub fn quiz_count(&self) -> usize {
        self.store.lock().quiz_count()
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn question(text: &str, correct_option: i64) -> NewQuestion {
        NewQuestion {
            text: text.into(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_option,
        }
    }

    fn controller() -> QuizController {
        QuizController::new(QuizStore::new())
    }

    #[test]
    fn create_quiz_assigns_unique_ids() {
        let controller = controller();

        let first = controller.create_quiz(
            "T".into(),
            vec![question("Q1", 0), question("Q2", 1), question("Q3", 2)],
        );
        let second = controller.create_quiz("T".into(), vec![question("Q1", 0)]);

        assert_ne!(first.id, second.id);
        let ids = first
            .questions
            .iter()
            .map(|question| question.id.as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), 3);
        assert_eq!(first.questions[1].text, "Q2");
        assert_eq!(first.questions[1].correct_option, 1);
        assert_eq!(controller.quiz_count(), 2);
    }

    #[test]
    fn get_quiz_returns_full_data() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);

        assert_eq!(controller.get_quiz(&quiz.id), Some(quiz));
    }

    #[test]
    fn get_quiz_misses_unknown_ids() {
        let controller = controller();
        controller.create_quiz("T".into(), vec![question("Q", 2)]);

        assert_eq!(controller.get_quiz("unknown"), None);
    }

    #[test]
    fn correct_answer_scores_once() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);
        let question_id = quiz.questions[0].id.clone();

        let outcome = controller
            .submit_answer(&quiz.id, "user", &question_id, 2)
            .unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                is_correct: true,
                correct_option: None,
            }
        );

        let result = controller.get_results(&quiz.id, "user").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(
            result.answers,
            vec![Answer {
                question_id: question_id.clone(),
                selected_option: 2,
                is_correct: true,
            }]
        );

        let again = controller.submit_answer(&quiz.id, "user", &question_id, 0);
        assert_eq!(again, Err(QuizError::AnswerAlreadyExists));

        let result = controller.get_results(&quiz.id, "user").unwrap();
        assert_eq!(result.score, 1);
        assert_eq!(result.answers.len(), 1);
    }

    #[test]
    fn wrong_answer_reveals_correct_option() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);
        let question_id = &quiz.questions[0].id;

        let outcome = controller
            .submit_answer(&quiz.id, "user", question_id, 1)
            .unwrap();
        assert_eq!(
            outcome,
            AnswerOutcome {
                is_correct: false,
                correct_option: Some(2),
            }
        );

        let result = controller.get_results(&quiz.id, "user").unwrap();
        assert_eq!(result.score, 0);
        assert!(!result.answers[0].is_correct);
    }

    #[test]
    fn submit_answer_checks_quiz_before_question() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);

        assert_eq!(
            controller.submit_answer("missing", "user", "missing", 2),
            Err(QuizError::QuizNotFound)
        );
        assert_eq!(
            controller.submit_answer(&quiz.id, "user", "missing", 2),
            Err(QuizError::QuestionNotFound)
        );
        assert_eq!(controller.get_results(&quiz.id, "user"), None);
    }

    #[test]
    fn questions_belong_to_their_quiz() {
        let controller = controller();
        let first = controller.create_quiz("A".into(), vec![question("Q", 0)]);
        let second = controller.create_quiz("B".into(), vec![question("Q", 0)]);

        assert_eq!(
            controller.submit_answer(&first.id, "user", &second.questions[0].id, 0),
            Err(QuizError::QuestionNotFound)
        );
    }

    #[test]
    fn score_counts_correct_answers() {
        let controller = controller();
        let quiz = controller.create_quiz(
            "T".into(),
            vec![question("Q1", 0), question("Q2", 1), question("Q3", 2)],
        );

        for (question, selected) in quiz.questions.iter().zip(&[0, 3, 2]) {
            controller
                .submit_answer(&quiz.id, "user", &question.id, *selected)
                .unwrap();
        }
        let _ = controller.submit_answer(&quiz.id, "user", &quiz.questions[1].id, 1);

        let result = controller.get_results(&quiz.id, "user").unwrap();
        let correct = result.answers.iter().filter(|answer| answer.is_correct).count();
        assert_eq!(result.score, 2);
        assert_eq!(result.score as usize, correct);
        assert_eq!(result.answers.len(), 3);
    }

    #[test]
    fn results_are_kept_per_user() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);
        let question_id = &quiz.questions[0].id;

        controller
            .submit_answer(&quiz.id, "alice", question_id, 2)
            .unwrap();
        controller
            .submit_answer(&quiz.id, "bob", question_id, 0)
            .unwrap();

        assert_eq!(controller.get_results(&quiz.id, "alice").unwrap().score, 1);
        assert_eq!(controller.get_results(&quiz.id, "bob").unwrap().score, 0);
        assert_eq!(controller.get_results(&quiz.id, "carol"), None);
    }

    #[test]
    fn concurrent_submissions_count_once() {
        let controller = controller();
        let quiz = controller.create_quiz("T".into(), vec![question("Q", 2)]);
        let question_id = quiz.questions[0].id.clone();

        let handles = (0..8)
            .map(|_| {
                let controller = controller.clone();
                let quiz_id = quiz.id.clone();
                let question_id = question_id.clone();
                std::thread::spawn(move || {
                    controller.submit_answer(&quiz_id, "user", &question_id, 2)
                })
            })
            .collect::<Vec<_>>();

        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(Result::is_ok)
            .count();

        assert_eq!(accepted, 1);
        assert_eq!(controller.get_results(&quiz.id, "user").unwrap().score, 1);
    }
}
