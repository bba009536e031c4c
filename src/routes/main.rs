use actix_web::{HttpResponse, Responder, get};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    timestamp: chrono::NaiveDateTime,
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "healthy",
        timestamp: Utc::now().naive_utc(),
    })
}
