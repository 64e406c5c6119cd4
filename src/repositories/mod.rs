pub mod account_repository;
pub mod answer_evaluation_repository;
pub mod attempt_result_repository;
pub mod quiz_item_repository;

pub use account_repository::{AccountRepository, MongoAccountRepository};
pub use answer_evaluation_repository::{AnswerEvaluationRepository, MongoAnswerEvaluationRepository};
pub use attempt_result_repository::{AttemptResultRepository, MongoAttemptResultRepository};
pub use quiz_item_repository::{MongoQuizItemRepository, QuizItemRepository};
