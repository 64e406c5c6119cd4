use std::sync::Arc;

use serde_json::Value;

use crate::{
    constants::evaluation_prompt::{
        candidate_answer_message, EVALUATION_SYSTEM_PROMPT, EVALUATION_TEMPERATURE,
        MISSING_FEEDBACK_PLACEHOLDER,
    },
    errors::{AppError, AppResult},
    models::{
        domain::AnswerEvaluation,
        dto::{request::EvaluateAnswerRequest, response::AnswerEvaluationDto},
    },
    repositories::AnswerEvaluationRepository,
    services::completion_client::CompletionClient,
};

/// Score and feedback pulled out of the collaborator's reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredReply {
    pub score: f64,
    pub feedback: String,
}

/// Parses the reply leniently: a non-number score becomes 0 and a
/// non-string feedback becomes the placeholder. Only unparsable JSON fails.
pub fn parse_scored_reply(raw: &str) -> AppResult<ScoredReply> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        log::error!("Failed to parse AI JSON response: {}", raw);
        AppError::CollaboratorProtocol(e.to_string())
    })?;

    let score = parsed.get("score").and_then(Value::as_f64).unwrap_or(0.0);
    let feedback = parsed
        .get("feedback")
        .and_then(Value::as_str)
        .unwrap_or(MISSING_FEEDBACK_PLACEHOLDER)
        .to_string();

    Ok(ScoredReply { score, feedback })
}

pub struct EvaluationService {
    repository: Arc<dyn AnswerEvaluationRepository>,
    completion_client: Option<Arc<dyn CompletionClient>>,
}

impl EvaluationService {
    pub fn new(
        repository: Arc<dyn AnswerEvaluationRepository>,
        completion_client: Option<Arc<dyn CompletionClient>>,
    ) -> Self {
        Self {
            repository,
            completion_client,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.completion_client.is_some()
    }

    pub async fn evaluate(&self, request: EvaluateAnswerRequest) -> AppResult<AnswerEvaluationDto> {
        let answer_text = request
            .answer_text
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError(
                    "answerText is required and should be a string.".to_string(),
                )
            })?;

        let completion_client = self.completion_client.as_ref().ok_or_else(|| {
            AppError::ConfigurationError(
                "OPENAI_API_KEY is not configured on the server. Ask the admin to set it in the .env file."
                    .to_string(),
            )
        })?;

        let raw = completion_client
            .complete_json(
                EVALUATION_SYSTEM_PROMPT,
                &candidate_answer_message(&answer_text),
                EVALUATION_TEMPERATURE,
            )
            .await?
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| "{}".to_string());

        let reply = parse_scored_reply(&raw)?;

        let evaluation = AnswerEvaluation::new(&answer_text, reply.feedback, reply.score);
        let evaluation = self.repository.create(evaluation).await?;
        Ok(AnswerEvaluationDto::from(evaluation))
    }

    pub async fn list_evaluations(&self) -> AppResult<Vec<AnswerEvaluationDto>> {
        let evaluations = self.repository.find_all_newest_first().await?;
        Ok(evaluations.into_iter().map(AnswerEvaluationDto::from).collect())
    }
}
