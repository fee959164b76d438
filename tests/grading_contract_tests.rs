use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use training_server::{
    errors::{AppError, AppResult},
    models::domain::{
        Choice, NewQuizCompletion, Question, QuestionResponse, Quiz, QuizCompletion, Submission,
    },
    repositories::{QuizCompletionRepository, QuizRepository},
    services::QuizService,
};

struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<HashMap<i64, Quiz>>>,
}

impl InMemoryQuizRepository {
    fn with_quizzes(quizzes: Vec<Quiz>) -> Self {
        Self {
            quizzes: Arc::new(RwLock::new(
                quizzes.into_iter().map(|q| (q.id, q)).collect(),
            )),
        }
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.get(&id).cloned())
    }
}

#[derive(Default)]
struct InMemoryQuizCompletionRepository {
    completions: RwLock<Vec<QuizCompletion>>,
    unavailable: bool,
}

impl InMemoryQuizCompletionRepository {
    fn unavailable() -> Self {
        Self {
            completions: RwLock::new(Vec::new()),
            unavailable: true,
        }
    }

    async fn count(&self) -> usize {
        self.completions.read().await.len()
    }
}

#[async_trait]
impl QuizCompletionRepository for InMemoryQuizCompletionRepository {
    async fn create(&self, completion: NewQuizCompletion) -> AppResult<QuizCompletion> {
        if self.unavailable {
            return Err(AppError::DatabaseError("completion store unavailable".to_string()));
        }
        let completion = QuizCompletion::from_new(completion);
        self.completions.write().await.push(completion.clone());
        Ok(completion)
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<QuizCompletion>> {
        let completions = self.completions.read().await;
        let mut items: Vec<_> = completions
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submit_ts.cmp(&a.submit_ts));
        Ok(items)
    }
}

fn question(id: i64, correct_choice: i64) -> Question {
    Question {
        id,
        text: format!("Question {}", id),
        choices: (0..3)
            .map(|choice_id| Choice {
                id: choice_id,
                text: format!("Choice {}", choice_id),
                correct: choice_id == correct_choice,
            })
            .collect(),
    }
}

/// Q1 answer {0}, Q2 answer {1}.
fn two_question_quiz() -> Quiz {
    Quiz {
        id: 123,
        name: "Travel Card Training".to_string(),
        description: None,
        questions: vec![question(0, 0), question(1, 1)],
    }
}

fn submission(responses: Vec<(i64, Vec<i64>)>) -> Submission {
    Submission {
        quiz_id: 123,
        responses: responses
            .into_iter()
            .map(|(question_id, response_ids)| QuestionResponse {
                question_id,
                response_ids,
            })
            .collect(),
    }
}

fn setup() -> (QuizService, Arc<InMemoryQuizCompletionRepository>) {
    let quizzes = Arc::new(InMemoryQuizRepository::with_quizzes(vec![two_question_quiz()]));
    let completions = Arc::new(InMemoryQuizCompletionRepository::default());
    (QuizService::new(quizzes, completions.clone()), completions)
}

#[tokio::test]
async fn all_correct_submission_passes_and_reveals_answers() {
    let (service, completions) = setup();

    let grade = service
        .grade(123, 1, &submission(vec![(0, vec![0]), (1, vec![1])]))
        .await
        .unwrap();

    assert_eq!(grade.correct_count, 2);
    assert_eq!(grade.question_count, 2);
    assert_eq!(grade.percentage, 1.0);
    assert!(grade.passed);
    assert_eq!(grade.questions[0].correct_ids, vec![0]);
    assert_eq!(grade.questions[1].correct_ids, vec![1]);

    let history = completions.find_by_user(1).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].passed);
    assert_eq!(grade.quiz_completion_id.as_deref(), Some(history[0].id.as_str()));
}

#[tokio::test]
async fn half_correct_submission_fails_and_redacts_answers() {
    let (service, completions) = setup();

    let grade = service
        .grade(123, 1, &submission(vec![(0, vec![1]), (1, vec![1])]))
        .await
        .unwrap();

    assert_eq!(grade.correct_count, 1);
    assert_eq!(grade.percentage, 0.5);
    assert!(!grade.passed);
    assert!(grade.questions[1].correct);
    assert!(grade.questions.iter().all(|q| q.correct_ids.is_empty()));

    let history = completions.find_by_user(1).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(!history[0].passed);
}

#[tokio::test]
async fn missing_response_is_rejected_without_a_completion() {
    let (service, completions) = setup();

    let err = service
        .grade(123, 1, &submission(vec![(0, vec![0])]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::IncompleteSubmission(ref missing) if missing == &vec![1]));
    assert_eq!(completions.count().await, 0);
}

#[tokio::test]
async fn unknown_quiz_is_rejected_without_a_completion() {
    let (service, completions) = setup();

    let err = service
        .grade(999, 1, &submission(vec![(0, vec![0]), (1, vec![1])]))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::QuizNotFound(999)));
    assert_eq!(completions.count().await, 0);
}

#[tokio::test]
async fn recorder_failure_returns_no_grade() {
    let quizzes = Arc::new(InMemoryQuizRepository::with_quizzes(vec![two_question_quiz()]));
    let service = QuizService::new(
        quizzes,
        Arc::new(InMemoryQuizCompletionRepository::unavailable()),
    );

    let result = service
        .grade(123, 1, &submission(vec![(0, vec![0]), (1, vec![1])]))
        .await;

    assert!(matches!(result, Err(AppError::CompletionRecordFailed(_))));
}

#[tokio::test]
async fn each_grading_call_records_its_own_completion() {
    let (service, completions) = setup();
    let answers = submission(vec![(0, vec![0]), (1, vec![1])]);

    let first = service.grade(123, 7, &answers).await.unwrap();
    let second = service.grade(123, 7, &answers).await.unwrap();

    assert_ne!(first.quiz_completion_id, second.quiz_completion_id);
    assert_eq!(service.list_completions(7).await.unwrap().len(), 2);
    assert!(service.list_completions(8).await.unwrap().is_empty());
    assert_eq!(completions.count().await, 2);
}
