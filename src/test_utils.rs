use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Account, AnswerEvaluation, AttemptResult, QuizItem},
    repositories::{
        account_repository::DUPLICATE_EMAIL_MESSAGE, AccountRepository,
        AnswerEvaluationRepository, AttemptResultRepository, QuizItemRepository,
    },
};

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(AppError::AlreadyExists(DUPLICATE_EMAIL_MESSAGE.to_string()));
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn update_password_hash(&self, email: &str, password_hash: &str) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        if let Some(account) = accounts.iter_mut().find(|a| a.email == email) {
            account.password_hash = password_hash.to_string();
            account.updated_at = Some(mongodb::bson::DateTime::now());
        }
        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuizItemRepository {
    items: Arc<RwLock<Vec<QuizItem>>>,
}

impl InMemoryQuizItemRepository {
    pub fn with_items(items: Vec<QuizItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }
}

#[async_trait]
impl QuizItemRepository for InMemoryQuizItemRepository {
    async fn find_all(&self) -> AppResult<Vec<QuizItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn insert_many(&self, items: Vec<QuizItem>) -> AppResult<usize> {
        let count = items.len();
        self.items.write().await.extend(items);
        Ok(count)
    }
}

#[derive(Default)]
pub struct InMemoryAttemptResultRepository {
    results: Arc<RwLock<Vec<AttemptResult>>>,
}

#[async_trait]
impl AttemptResultRepository for InMemoryAttemptResultRepository {
    async fn create(&self, result: AttemptResult) -> AppResult<AttemptResult> {
        self.results.write().await.push(result.clone());
        Ok(result)
    }

    async fn find_all_newest_first(&self) -> AppResult<Vec<AttemptResult>> {
        let mut results = self.results.read().await.clone();
        // Insertion order breaks ties between equal millisecond timestamps.
        results.reverse();
        results.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(results)
    }
}

#[derive(Default)]
pub struct InMemoryAnswerEvaluationRepository {
    evaluations: Arc<RwLock<Vec<AnswerEvaluation>>>,
}

#[async_trait]
impl AnswerEvaluationRepository for InMemoryAnswerEvaluationRepository {
    async fn create(&self, evaluation: AnswerEvaluation) -> AppResult<AnswerEvaluation> {
        self.evaluations.write().await.push(evaluation.clone());
        Ok(evaluation)
    }

    async fn find_all_newest_first(&self) -> AppResult<Vec<AnswerEvaluation>> {
        let mut evaluations = self.evaluations.read().await.clone();
        evaluations.reverse();
        evaluations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(evaluations)
    }
}

pub mod test_helpers {
    use uuid::Uuid;

    use crate::uploads::UploadSettings;

    /// Builds a single-part multipart body; returns (content type header, body).
    pub fn multipart_body(
        field: &str,
        filename: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> (String, Vec<u8>) {
        let boundary = "----mock-interview-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

        (format!("multipart/form-data; boundary={}", boundary), body)
    }

    /// Upload settings pointing at a fresh directory under the system temp dir.
    pub fn temp_upload_settings() -> UploadSettings {
        UploadSettings {
            dir: std::env::temp_dir()
                .join("mock-interview-test-uploads")
                .join(Uuid::new_v4().simple().to_string()),
            ..UploadSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_in_memory_results_are_newest_first() {
        let repository = InMemoryAttemptResultRepository::default();
        let mut older = AttemptResult::new(1.0, 1.0, 1.0, 1.0, 100.0);
        older.created_at = mongodb::bson::DateTime::from_millis(1_000);
        let newer = AttemptResult::new(2.0, 2.0, 2.0, 2.0, 100.0);

        repository.create(older).await.unwrap();
        repository.create(newer).await.unwrap();

        let results = repository.find_all_newest_first().await.unwrap();
        assert_eq!(results[0].score, 2.0);
        assert_eq!(results[1].score, 1.0);
    }
}
