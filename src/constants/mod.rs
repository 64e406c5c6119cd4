pub mod evaluation_prompt;
pub mod interview_questions;
pub mod seed_questions;
pub mod skills;
