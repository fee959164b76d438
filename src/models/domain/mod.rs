pub mod grade;
pub mod quiz;
pub mod quiz_completion;
pub mod submission;
pub use grade::{Grade, QuestionResult};
pub use quiz::{Choice, Question, Quiz};
pub use quiz_completion::{NewQuizCompletion, QuizCompletion};
pub use submission::{QuestionResponse, Submission};
