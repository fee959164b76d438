use serde::{Deserialize, Serialize};

/// Minimum fraction of correctly answered questions needed to pass.
pub const PASSING_PERCENTAGE: f64 = 0.75;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Grade {
    pub quiz_id: i64,
    pub correct_count: usize,
    pub question_count: usize,
    pub percentage: f64,
    pub passed: bool,
    pub questions: Vec<QuestionResult>,
    pub quiz_completion_id: Option<String>, // Set once the completion is recorded
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: i64,
    pub correct: bool,
    pub selected_ids: Vec<i64>,
    pub correct_ids: Vec<i64>, // Empty unless the grade passed
}

impl Grade {
    /// Builds a grade from per-question results in quiz order.
    ///
    /// `questions` must not be empty. Answer keys are stripped from every
    /// result when the grade does not pass.
    pub fn from_results(quiz_id: i64, mut questions: Vec<QuestionResult>) -> Self {
        let question_count = questions.len();
        let correct_count = questions.iter().filter(|q| q.correct).count();
        let percentage = correct_count as f64 / question_count as f64;
        let passed = percentage >= PASSING_PERCENTAGE;

        if !passed {
            for question in &mut questions {
                question.correct_ids.clear();
            }
        }

        Grade {
            quiz_id,
            correct_count,
            question_count,
            percentage,
            passed,
            questions,
            quiz_completion_id: None,
        }
    }

    pub fn with_completion_id(mut self, quiz_completion_id: String) -> Self {
        self.quiz_completion_id = Some(quiz_completion_id);
        self
    }
}
