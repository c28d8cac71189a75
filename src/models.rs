use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

/// A question as supplied by the caller, before ids are assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct NewQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}

/// A validated answer submission.
#[derive(Clone, Debug, PartialEq)]
pub struct AnswerSubmission {
    pub quiz_id: String,
    pub question_id: String,
    pub selected_option: i64,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub selected_option: i64,
    pub is_correct: bool,
}

/// Scoring record of one user for one quiz.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub user_id: String,
    pub score: u32,
    pub answers: Vec<Answer>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub options: Vec<String>,
}

/// What callers get to see of a quiz: everything except the correct options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuestionView>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> QuizView {
        let questions = quiz
            .questions
            .into_iter()
            .map(|question| QuestionView {
                id: question.id,
                text: question.text,
                options: question.options,
            })
            .collect();

        QuizView {
            id: quiz.id,
            title: quiz.title,
            questions,
        }
    }
}

// Request bodies keep every field optional so that missing fields are
// reported by the validators instead of the JSON decoder. Numbers are read as
// f64 so that `2.0` is accepted as the integer 2.

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CreateQuizRequest {
    pub title: Option<String>,
    pub questions: Option<Vec<QuestionRequest>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct QuestionRequest {
    pub text: Option<String>,
    pub options: Option<Vec<String>>,
    pub correct_option: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub quiz_id: Option<String>,
    pub question_id: Option<String>,
    pub selected_option: Option<f64>,
}

/// Contents of the quiz seed file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub quiz: Vec<SeedQuiz>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeedQuiz {
    pub title: String,
    pub questions: Vec<SeedQuestion>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SeedQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
}
