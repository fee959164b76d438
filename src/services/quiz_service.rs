use std::collections::HashSet;
use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        Grade, NewQuizCompletion, Question, QuestionResult, Quiz, QuizCompletion, Submission,
    },
    repositories::{QuizCompletionRepository, QuizRepository},
};

pub struct QuizService {
    quiz_repository: Arc<dyn QuizRepository>,
    completion_repository: Arc<dyn QuizCompletionRepository>,
}

impl QuizService {
    pub fn new(
        quiz_repository: Arc<dyn QuizRepository>,
        completion_repository: Arc<dyn QuizCompletionRepository>,
    ) -> Self {
        Self {
            quiz_repository,
            completion_repository,
        }
    }

    pub async fn get_quiz(&self, quiz_id: i64) -> AppResult<Quiz> {
        self.quiz_repository
            .find_by_id(quiz_id)
            .await?
            .ok_or(AppError::QuizNotFound(quiz_id))
    }

    pub async fn list_completions(&self, user_id: i64) -> AppResult<Vec<QuizCompletion>> {
        self.completion_repository.find_by_user(user_id).await
    }

    /// Grade a submission and record the completion.
    ///
    /// The returned grade always carries the id of the completion record;
    /// nothing is recorded when the quiz is missing, empty, or not fully answered.
    /// `submission.quiz_id` is not checked against `quiz_id`.
    pub async fn grade(
        &self,
        quiz_id: i64,
        user_id: i64,
        submission: &Submission,
    ) -> AppResult<Grade> {
        let quiz = self.get_quiz(quiz_id).await?;

        let grade = Self::score(&quiz, submission).inspect_err(|err| {
            log::warn!("Rejected submission for quiz {} by user {}: {}", quiz_id, user_id, err);
        })?;

        let completion = self
            .completion_repository
            .create(NewQuizCompletion {
                quiz_id,
                user_id,
                passed: grade.passed,
            })
            .await
            .map_err(|err| AppError::CompletionRecordFailed(err.to_string()))?;

        log::info!(
            "User {} scored {}/{} on quiz {} (passed: {}, completion {})",
            user_id,
            grade.correct_count,
            grade.question_count,
            quiz_id,
            grade.passed,
            completion.id
        );

        Ok(grade.with_completion_id(completion.id))
    }

    /// Score a submission against a quiz without recording anything.
    pub fn score(quiz: &Quiz, submission: &Submission) -> AppResult<Grade> {
        if quiz.questions.is_empty() {
            return Err(AppError::EmptyQuiz(quiz.id));
        }

        let mut results = Vec::with_capacity(quiz.questions.len());
        let mut questions_without_responses = Vec::new();

        for question in &quiz.questions {
            match submission.response_for(question.id) {
                Some(response) => {
                    results.push(Self::score_question(question, &response.response_ids))
                }
                None => questions_without_responses.push(question.id),
            }
        }

        if !questions_without_responses.is_empty() {
            return Err(AppError::IncompleteSubmission(questions_without_responses));
        }

        Ok(Grade::from_results(quiz.id, results))
    }

    /// Correct only when the selection equals the answer key exactly.
    fn score_question(question: &Question, selected_ids: &[i64]) -> QuestionResult {
        let correct_ids = question.correct_choice_ids();

        let selected: HashSet<i64> = selected_ids.iter().copied().collect();
        let expected: HashSet<i64> = correct_ids.iter().copied().collect();

        QuestionResult {
            question_id: question.id,
            correct: selected == expected,
            selected_ids: selected_ids.to_vec(),
            correct_ids,
        }
    }
}
