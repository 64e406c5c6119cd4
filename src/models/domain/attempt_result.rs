use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResult {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Reserved account reference. Never set and never queried.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ObjectId>,
    pub score: f64,
    pub total_questions: f64,
    pub correct_answers: f64,
    pub attempted_questions: f64,
    /// Percentage as sent by the client, e.g. 80 for 80%. Not recomputed.
    pub accuracy: f64,
    pub created_at: DateTime,
}

impl AttemptResult {
    pub fn new(
        score: f64,
        total_questions: f64,
        correct_answers: f64,
        attempted_questions: f64,
        accuracy: f64,
    ) -> Self {
        AttemptResult {
            id: Some(ObjectId::new()),
            user: None,
            score,
            total_questions,
            correct_answers,
            attempted_questions,
            accuracy,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_result_keeps_values_verbatim() {
        // correct/attempted deliberately disagree with accuracy
        let result = AttemptResult::new(3.0, 10.0, 2.0, 9.0, 95.0);

        assert_eq!(result.score, 3.0);
        assert_eq!(result.correct_answers, 2.0);
        assert_eq!(result.accuracy, 95.0);
        assert!(result.user.is_none());
        assert!(result.id.is_some());
    }

    #[test]
    fn test_attempt_result_document_omits_unset_user() {
        let result = AttemptResult::new(8.0, 10.0, 8.0, 10.0, 80.0);
        let doc = mongodb::bson::to_document(&result).expect("result should serialize");

        assert!(!doc.contains_key("user"));
        assert!(doc.contains_key("totalQuestions"));
        assert!(doc.get_datetime("createdAt").is_ok());
    }
}
