use actix_web::{post, HttpResponse};

use crate::{errors::AppError, services::resume_service::ResumeService, uploads::ResumeUpload};

#[post("/api/resume/upload")]
pub async fn upload_resume(upload: ResumeUpload) -> Result<HttpResponse, AppError> {
    let stored = upload
        .0
        .ok_or_else(|| AppError::ValidationError("No file uploaded".to_string()))?;

    log::info!(
        "Stored resume {} as {} ({} bytes)",
        stored.original_name,
        stored.stored_name,
        stored.size
    );
    Ok(HttpResponse::Ok().json(ResumeService::upload_receipt(&stored)))
}

#[post("/api/resume/analyze")]
pub async fn analyze_resume(upload: ResumeUpload) -> Result<HttpResponse, AppError> {
    let stored = upload
        .0
        .ok_or_else(|| AppError::ValidationError("No resume file uploaded".to_string()))?;

    Ok(HttpResponse::Ok().json(ResumeService::fallback_analysis(&stored)))
}
