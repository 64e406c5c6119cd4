use serde::Deserialize;
use validator::Validate;

// Fields are optional so that a missing field reaches validation and gets
// the endpoint's own message instead of a deserializer error.

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,

    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultRequest {
    #[validate(required)]
    pub score: Option<f64>,

    #[validate(required)]
    pub total_questions: Option<f64>,

    #[validate(required)]
    pub correct_answers: Option<f64>,

    #[validate(required)]
    pub attempted_questions: Option<f64>,

    #[validate(required)]
    pub accuracy: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateAnswerRequest {
    pub answer_text: Option<String>,
}
