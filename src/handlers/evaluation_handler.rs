use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::EvaluateAnswerRequest,
};

#[post("/api/evaluations")]
pub async fn evaluate_answer(
    state: web::Data<AppState>,
    request: web::Json<EvaluateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let evaluation = state.evaluation_service.evaluate(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(evaluation))
}

#[get("/api/evaluations")]
pub async fn list_evaluations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let evaluations = state.evaluation_service.list_evaluations().await?;
    Ok(HttpResponse::Ok().json(evaluations))
}
