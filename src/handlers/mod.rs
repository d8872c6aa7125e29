pub mod health_handler;
pub mod quiz_handler;
pub mod transcript_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, index};
pub use quiz_handler::{generate_questions, generate_questions_from_stored, generate_quiz};
pub use transcript_handler::{fetch_transcript, get_transcript};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .service(index)
    .service(health_check)
    .service(get_transcript)
    .service(fetch_transcript)
    .service(generate_questions_from_stored)
    .service(generate_questions)
    .service(generate_quiz);
}
