use std::sync::Arc;

use crate::{
    constants::{interview_questions::INTERVIEW_QUESTIONS, seed_questions::SEED_QUESTIONS},
    errors::AppResult,
    models::{domain::QuizItem, dto::response::QuizItemDto},
    repositories::QuizItemRepository,
};

/// Serves both question sources: stored multiple-choice items and the fixed
/// list of open interview prompts.
pub struct QuestionService {
    repository: Arc<dyn QuizItemRepository>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuizItemRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_quiz_items(&self) -> AppResult<Vec<QuizItemDto>> {
        let items = self.repository.find_all().await?;
        Ok(items.into_iter().map(QuizItemDto::from).collect())
    }

    pub fn interview_questions(&self) -> Vec<String> {
        INTERVIEW_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }

    /// Inserts the built-in question set when the store holds none.
    /// Returns how many items were written.
    pub async fn seed_if_empty(&self) -> AppResult<usize> {
        if self.repository.count().await? > 0 {
            return Ok(0);
        }

        let items = SEED_QUESTIONS
            .iter()
            .map(|seed| QuizItem::new(seed.question, seed.options, seed.answer, seed.difficulty))
            .collect();

        let inserted = self.repository.insert_many(items).await?;
        log::info!("Seeded {} quiz questions", inserted);
        Ok(inserted)
    }
}
