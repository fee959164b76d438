use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{NewQuizCompletion, QuizCompletion},
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait QuizCompletionRepository: Send + Sync {
    /// Persists a completion and returns it with its generated id.
    async fn create(&self, completion: NewQuizCompletion) -> AppResult<QuizCompletion>;

    /// All completions for a user, newest first.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<QuizCompletion>>;
}

pub struct MongoQuizCompletionRepository {
    collection: Collection<QuizCompletion>,
}

impl MongoQuizCompletionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quiz_completions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_quiz_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "quiz_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("user_quiz".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_quiz_index).await?;

        log::info!("Successfully created indexes for quiz_completions collection");
        Ok(())
    }
}

#[async_trait]
impl QuizCompletionRepository for MongoQuizCompletionRepository {
    async fn create(&self, completion: NewQuizCompletion) -> AppResult<QuizCompletion> {
        let completion = QuizCompletion::from_new(completion);
        self.collection.insert_one(&completion).await?;
        Ok(completion)
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<QuizCompletion>> {
        let completions = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "submit_ts": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(completions)
    }
}
