use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{require, Database},
    errors::AppResult,
    models::domain::AttemptResult,
};

#[async_trait]
pub trait AttemptResultRepository: Send + Sync {
    async fn create(&self, result: AttemptResult) -> AppResult<AttemptResult>;
    /// All results, newest first.
    async fn find_all_newest_first(&self) -> AppResult<Vec<AttemptResult>>;
}

pub struct MongoAttemptResultRepository {
    collection: Option<Collection<AttemptResult>>,
}

impl MongoAttemptResultRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("results");
        Self { collection }
    }
}

#[async_trait]
impl AttemptResultRepository for MongoAttemptResultRepository {
    async fn create(&self, result: AttemptResult) -> AppResult<AttemptResult> {
        require(&self.collection)?.insert_one(&result).await?;
        Ok(result)
    }

    async fn find_all_newest_first(&self) -> AppResult<Vec<AttemptResult>> {
        let results = require(&self.collection)?
            .find(doc! {})
            .sort(doc! { "createdAt": -1 })
            .await?
            .try_collect()
            .await?;
        Ok(results)
    }
}
