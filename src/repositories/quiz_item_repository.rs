use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::{require, Database},
    errors::AppResult,
    models::domain::QuizItem,
};

#[async_trait]
pub trait QuizItemRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<QuizItem>>;
    async fn count(&self) -> AppResult<u64>;
    async fn insert_many(&self, items: Vec<QuizItem>) -> AppResult<usize>;
}

pub struct MongoQuizItemRepository {
    collection: Option<Collection<QuizItem>>,
}

impl MongoQuizItemRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("questions");
        Self { collection }
    }
}

#[async_trait]
impl QuizItemRepository for MongoQuizItemRepository {
    async fn find_all(&self) -> AppResult<Vec<QuizItem>> {
        let cursor = require(&self.collection)?.find(doc! {}).await?;
        let items: Vec<QuizItem> = cursor.try_collect().await?;
        Ok(items)
    }

    async fn count(&self) -> AppResult<u64> {
        let count = require(&self.collection)?
            .count_documents(doc! {})
            .await?;
        Ok(count)
    }

    async fn insert_many(&self, items: Vec<QuizItem>) -> AppResult<usize> {
        if items.is_empty() {
            return Ok(0);
        }
        let result = require(&self.collection)?.insert_many(&items).await?;
        Ok(result.inserted_ids.len())
    }
}
