pub mod account;
pub mod answer_evaluation;
pub mod attempt_result;
pub mod quiz_item;
pub use account::Account;
pub use answer_evaluation::AnswerEvaluation;
pub use attempt_result::AttemptResult;
pub use quiz_item::QuizItem;
