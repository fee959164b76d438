use actix_web::{get, web, HttpResponse};

use crate::db::Database;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(db: web::Data<Database>) -> HttpResponse {
    let db_health = db.health_check().await;

    let response = serde_json::json!({
        "status": if db_health.is_ok() { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    match db_health {
        Ok(()) => HttpResponse::Ok().json(response),
        Err(err) => {
            log::warn!("Readiness check failed: {}", err);
            HttpResponse::ServiceUnavailable().json(response)
        }
    }
}
