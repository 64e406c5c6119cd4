use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::AttemptResult,
        dto::{request::RecordResultRequest, response::AttemptResultDto},
    },
    repositories::AttemptResultRepository,
};

pub struct ResultService {
    repository: Arc<dyn AttemptResultRepository>,
}

impl ResultService {
    pub fn new(repository: Arc<dyn AttemptResultRepository>) -> Self {
        Self { repository }
    }

    /// Stores the five metrics exactly as submitted. They are not checked
    /// against each other.
    pub async fn record_result(&self, request: RecordResultRequest) -> AppResult<AttemptResultDto> {
        let missing = || AppError::ValidationError("Missing result fields.".to_string());

        request.validate().map_err(|_| missing())?;

        let (
            Some(score),
            Some(total_questions),
            Some(correct_answers),
            Some(attempted_questions),
            Some(accuracy),
        ) = (
            request.score,
            request.total_questions,
            request.correct_answers,
            request.attempted_questions,
            request.accuracy,
        )
        else {
            return Err(missing());
        };

        let result = AttemptResult::new(
            score,
            total_questions,
            correct_answers,
            attempted_questions,
            accuracy,
        );
        let result = self.repository.create(result).await?;
        Ok(AttemptResultDto::from(result))
    }

    pub async fn list_results(&self) -> AppResult<Vec<AttemptResultDto>> {
        let results = self.repository.find_all_newest_first().await?;
        Ok(results.into_iter().map(AttemptResultDto::from).collect())
    }
}
