use crate::error::QuizError;
use crate::models::{
    AnswerSubmission, CreateQuizRequest, NewQuestion, QuestionRequest, SeedQuiz,
    SubmitAnswerRequest,
};

const OPTION_COUNT: usize = 4;

/// Checks a create-quiz body and returns its title and questions.
///
/// Only the first violation is reported.
pub fn create_quiz(request: CreateQuizRequest) -> Result<(String, Vec<NewQuestion>), QuizError> {
    let title = non_empty(request.title, "title")?;
    let questions = required(request.questions, "questions")?;

    if questions.is_empty() {
        return Err(invalid("questions must contain at least 1 items"));
    }

    let questions = questions
        .into_iter()
        .enumerate()
        .map(|(index, question)| self::question(question, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((title, questions))
}

fn question(request: QuestionRequest, index: usize) -> Result<NewQuestion, QuizError> {
    let path = format!("questions[{}]", index);

    let text = non_empty(request.text, &format!("{}.text", path))?;

    let options_path = format!("{}.options", path);
    let options = required(request.options, &options_path)?;
    if options.len() != OPTION_COUNT {
        return Err(invalid(format!(
            "{} must contain {} items",
            options_path, OPTION_COUNT
        )));
    }
    let options = options
        .into_iter()
        .enumerate()
        .map(|(i, option)| non_empty(Some(option), &format!("{}[{}]", options_path, i)))
        .collect::<Result<Vec<_>, _>>()?;

    let correct_path = format!("{}.correctOption", path);
    let correct_option = required(request.correct_option, &correct_path)?;
    let correct_option = integer(correct_option, &correct_path)?;
    if correct_option < 0 {
        return Err(invalid(format!(
            "{} must be greater than or equal to 0",
            correct_path
        )));
    }
    if correct_option >= OPTION_COUNT as i64 {
        return Err(invalid(format!(
            "{} must be less than or equal to {}",
            correct_path,
            OPTION_COUNT - 1
        )));
    }

    Ok(NewQuestion {
        text,
        options,
        correct_option,
    })
}

pub fn submit_answer(request: SubmitAnswerRequest) -> Result<AnswerSubmission, QuizError> {
    Ok(AnswerSubmission {
        quiz_id: non_empty(request.quiz_id, "quizId")?,
        question_id: non_empty(request.question_id, "questionId")?,
        selected_option: integer(
            required(request.selected_option, "selectedOption")?,
            "selectedOption",
        )?,
    })
}

/// Seeded quizzes go through the same checks as posted ones.
pub fn seed_quiz(seed: SeedQuiz) -> Result<(String, Vec<NewQuestion>), QuizError> {
    let questions = seed
        .questions
        .into_iter()
        .map(|question| QuestionRequest {
            text: Some(question.text),
            options: Some(question.options),
            correct_option: Some(question.correct_option as f64),
        })
        .collect();

    create_quiz(CreateQuizRequest {
        title: Some(seed.title),
        questions: Some(questions),
    })
}

/// Strips quoting from decoder and validator messages before they reach clients.
pub fn clean_message(message: &str) -> String {
    message.replace(&['\'', '"', '`'][..], "")
}

fn required<T>(value: Option<T>, path: &str) -> Result<T, QuizError> {
    value.ok_or_else(|| invalid(format!("{} is required", path)))
}

fn integer(value: f64, path: &str) -> Result<i64, QuizError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(invalid(format!("{} must be an integer", path)));
    }
    Ok(value as i64)
}

fn non_empty(value: Option<String>, path: &str) -> Result<String, QuizError> {
    let value = required(value, path)?;
    if value.is_empty() {
        return Err(invalid(format!("{} is not allowed to be empty", path)));
    }
    Ok(value)
}

fn invalid(message: impl Into<String>) -> QuizError {
    QuizError::Validation(message.into())
}
