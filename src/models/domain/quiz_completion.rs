use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Auditable fact that a user attempted a quiz with a given outcome.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizCompletion {
    pub id: String,
    pub quiz_id: i64,
    pub user_id: i64,
    pub passed: bool,
    pub submit_ts: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewQuizCompletion {
    pub quiz_id: i64,
    pub user_id: i64,
    pub passed: bool,
}

impl QuizCompletion {
    pub fn from_new(completion: NewQuizCompletion) -> Self {
        QuizCompletion {
            id: Uuid::new_v4().to_string(),
            quiz_id: completion.quiz_id,
            user_id: completion.user_id,
            passed: completion.passed,
            submit_ts: Utc::now(),
        }
    }
}
