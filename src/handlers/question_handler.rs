use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError};

#[get("/api/questions")]
pub async fn get_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let items = state.question_service.list_quiz_items().await?;
    Ok(HttpResponse::Ok().json(items))
}

#[get("/api/interview/questions")]
pub async fn get_interview_questions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.question_service.interview_questions()))
}
