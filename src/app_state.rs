use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizCompletionRepository, MongoQuizRepository},
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config, db: &Database) -> AppResult<Self> {
        let quiz_repository = Arc::new(MongoQuizRepository::new(db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        let completion_repository = Arc::new(MongoQuizCompletionRepository::new(
            db,
            &config.completions_collection,
        ));
        completion_repository.ensure_indexes().await?;

        let quiz_service = Arc::new(QuizService::new(quiz_repository, completion_repository));

        Ok(Self::with_service(quiz_service, config))
    }

    pub fn with_service(quiz_service: Arc<QuizService>, config: Config) -> Self {
        Self {
            quiz_service,
            config: Arc::new(config),
        }
    }
}
