use serde::{Deserialize, Serialize};

/// A learner's answers to one quiz. Single use.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Submission {
    pub quiz_id: i64,
    pub responses: Vec<QuestionResponse>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResponse {
    pub question_id: i64,
    pub response_ids: Vec<i64>, // Selected choice ids, order irrelevant
}

impl Submission {
    /// First response for `question_id`; later duplicates are ignored.
    pub fn response_for(&self, question_id: i64) -> Option<&QuestionResponse> {
        self.responses
            .iter()
            .find(|response| response.question_id == question_id)
    }
}
