use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{LoginRequest, RegisterRequest},
};

#[post("/api/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.account_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.account_service.authenticate(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
