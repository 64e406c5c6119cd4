use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{require, Database},
    errors::AppResult,
    models::domain::AnswerEvaluation,
};

#[async_trait]
pub trait AnswerEvaluationRepository: Send + Sync {
    async fn create(&self, evaluation: AnswerEvaluation) -> AppResult<AnswerEvaluation>;
    async fn find_all_newest_first(&self) -> AppResult<Vec<AnswerEvaluation>>;
}

pub struct MongoAnswerEvaluationRepository {
    collection: Option<Collection<AnswerEvaluation>>,
}

impl MongoAnswerEvaluationRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("evaluations");
        Self { collection }
    }
}

#[async_trait]
impl AnswerEvaluationRepository for MongoAnswerEvaluationRepository {
    async fn create(&self, evaluation: AnswerEvaluation) -> AppResult<AnswerEvaluation> {
        require(&self.collection)?.insert_one(&evaluation).await?;
        Ok(evaluation)
    }

    async fn find_all_newest_first(&self) -> AppResult<Vec<AnswerEvaluation>> {
        let evaluations = require(&self.collection)?
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(evaluations)
    }
}
