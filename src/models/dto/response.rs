use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Account, AnswerEvaluation, AttemptResult, QuizItem};

fn to_utc(datetime: mongodb::bson::DateTime) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(datetime.timestamp_millis()).unwrap_or_default()
}

fn oid_hex(id: Option<mongodb::bson::oid::ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}

/// Public account fields; the password hash never leaves the service.
#[derive(Debug, Clone, Serialize)]
pub struct AccountDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Account> for AccountDto {
    fn from(account: &Account) -> Self {
        AccountDto {
            id: account.id_hex(),
            name: account.name.clone(),
            email: account.email.clone(),
            role: account.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: AccountDto,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizItemDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub answer: i32,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<QuizItem> for QuizItemDto {
    fn from(item: QuizItem) -> Self {
        QuizItemDto {
            id: oid_hex(item.id),
            question: item.question,
            options: item.options,
            answer: item.answer,
            difficulty: item.difficulty,
            created_at: item.created_at.map(to_utc),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptResultDto {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub score: f64,
    pub total_questions: f64,
    pub correct_answers: f64,
    pub attempted_questions: f64,
    pub accuracy: f64,
    pub created_at: DateTime<Utc>,
}

impl From<AttemptResult> for AttemptResultDto {
    fn from(result: AttemptResult) -> Self {
        AttemptResultDto {
            id: oid_hex(result.id),
            user: result.user.map(|oid| oid.to_hex()),
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            attempted_questions: result.attempted_questions,
            accuracy: result.accuracy,
            created_at: to_utc(result.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEvaluationDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub answer_text: String,
    pub feedback: String,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}

impl From<AnswerEvaluation> for AnswerEvaluationDto {
    fn from(evaluation: AnswerEvaluation) -> Self {
        AnswerEvaluationDto {
            id: oid_hex(evaluation.id),
            answer_text: evaluation.answer_text,
            feedback: evaluation.feedback,
            score: evaluation.score,
            created_at: to_utc(evaluation.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub stored_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub status: String,
    pub analysis_type: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub note: String,
}
