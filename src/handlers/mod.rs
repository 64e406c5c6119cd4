pub mod auth_handler;
pub mod evaluation_handler;
pub mod health_handler;
pub mod question_handler;
pub mod result_handler;
pub mod resume_handler;

use actix_web::web;

use crate::errors::AppError;

/// Malformed or mistyped JSON bodies surface as validation errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {}", err)).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_handler::root)
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(auth_handler::register)
        .service(auth_handler::login)
        .service(question_handler::get_questions)
        .service(question_handler::get_interview_questions)
        .service(result_handler::record_result)
        .service(result_handler::list_results)
        .service(evaluation_handler::evaluate_answer)
        .service(evaluation_handler::list_evaluations)
        .service(resume_handler::upload_resume)
        .service(resume_handler::analyze_resume);
}
