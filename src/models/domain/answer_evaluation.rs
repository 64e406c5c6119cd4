use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub answer_text: String,
    pub feedback: String,
    /// 0-10 by convention; whatever the collaborator returned is kept.
    pub score: f64,
    pub created_at: DateTime,
}

impl AnswerEvaluation {
    pub fn new(answer_text: &str, feedback: String, score: f64) -> Self {
        AnswerEvaluation {
            id: Some(ObjectId::new()),
            answer_text: answer_text.to_string(),
            feedback,
            score,
            created_at: DateTime::now(),
        }
    }
}
