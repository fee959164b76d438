use serde::Serialize;

use crate::models::domain::{Choice, Question, Quiz};

/// Quiz as shown to a learner: no answer key.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<QuestionDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionDto {
    pub id: i64,
    pub text: String,
    pub choices: Vec<ChoiceDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceDto {
    pub id: i64,
    pub text: String,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id,
            name: quiz.name,
            description: quiz.description,
            questions: quiz.questions.into_iter().map(QuestionDto::from).collect(),
        }
    }
}

impl From<Question> for QuestionDto {
    fn from(question: Question) -> Self {
        QuestionDto {
            id: question.id,
            text: question.text,
            choices: question.choices.into_iter().map(ChoiceDto::from).collect(),
        }
    }
}

impl From<Choice> for ChoiceDto {
    fn from(choice: Choice) -> Self {
        ChoiceDto {
            id: choice.id,
            text: choice.text,
        }
    }
}
