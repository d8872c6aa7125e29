use actix_web::{get, HttpResponse};

use crate::models::dto::response::MessageResponse;

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse {
        message: "Transcript server. GET /transcript to get transcript.json".to_string(),
    })
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
