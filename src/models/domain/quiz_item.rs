use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A multiple-choice question. Items are seeded out-of-band and only read
/// through the API.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItem {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct choice.
    pub answer: i32,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
}

fn default_difficulty() -> String {
    "easy".to_string()
}

impl QuizItem {
    pub fn new(question: &str, options: &[&str], answer: i32, difficulty: &str) -> Self {
        QuizItem {
            id: Some(ObjectId::new()),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer,
            difficulty: difficulty.to_string(),
            created_at: Some(DateTime::now()),
        }
    }
}
