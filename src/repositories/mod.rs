pub mod quiz_completion_repository;
pub mod quiz_repository;

pub use quiz_completion_repository::{MongoQuizCompletionRepository, QuizCompletionRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
