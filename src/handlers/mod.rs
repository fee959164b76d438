pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{get_quiz, list_completions, submit_quiz};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_ready)
        .service(get_quiz)
        .service(submit_quiz)
        .service(list_completions);
}
