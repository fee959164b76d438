use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{domain::Submission, dto::response::QuizDto},
};

#[get("/api/quizzes/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(quiz_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(QuizDto::from(quiz)))
}

#[post("/api/users/{user_id}/quizzes/{quiz_id}/submissions")]
pub async fn submit_quiz(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    submission: web::Json<Submission>,
) -> Result<HttpResponse, AppError> {
    let (user_id, quiz_id) = path.into_inner();
    let grade = state
        .quiz_service
        .grade(quiz_id, user_id, &submission)
        .await?;
    Ok(HttpResponse::Ok().json(grade))
}

#[get("/api/users/{user_id}/completions")]
pub async fn list_completions(
    state: web::Data<AppState>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let completions = state
        .quiz_service
        .list_completions(user_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(completions))
}
