use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>, // Presented and graded in this order
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: i64, // Unique within its quiz
    pub text: String,
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Choice {
    pub id: i64, // Unique within its question
    pub text: String,
    pub correct: bool,
}

impl Question {
    /// Ids of the choices flagged correct, in choice order.
    pub fn correct_choice_ids(&self) -> Vec<i64> {
        self.choices
            .iter()
            .filter(|choice| choice.correct)
            .map(|choice| choice.id)
            .collect()
    }
}
