pub mod account_service;
pub mod completion_client;
pub mod evaluation_service;
pub mod question_service;
pub mod result_service;
pub mod resume_service;
