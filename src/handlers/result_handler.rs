use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::RecordResultRequest,
};

#[post("/api/results")]
pub async fn record_result(
    state: web::Data<AppState>,
    request: web::Json<RecordResultRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state.result_service.record_result(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(result))
}

#[get("/api/results")]
pub async fn list_results(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let results = state.result_service.list_results().await?;
    Ok(HttpResponse::Ok().json(results))
}
