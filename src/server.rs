use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use std::sync::Arc;

use crate::{
    config::ServerConfig,
    models::{GenerateResponse, HealthResponse},
    service::GenerationService,
};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5001;

pub struct AppState {
    pub service: Arc<GenerationService>,
    pub model_id: String,
}

/// POST /generate - run one prompt through the generation service.
/// A missing or whitespace-only prompt is rejected with 400; both outcome
/// shapes are returned with 200 and the wire envelope.
async fn generate(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    let prompt = payload
        .get("prompt")
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .trim()
        .to_string();

    if prompt.is_empty() {
        return HttpResponse::BadRequest().json(GenerateResponse {
            success: false,
            error: Some("No prompt provided".to_string()),
            ..Default::default()
        });
    }

    let outcome = state.service.generate(&prompt).await;
    HttpResponse::Ok().json(GenerateResponse::from(outcome))
}

/// GET /health - liveness probe reporting the configured model.
async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(state.model_id.as_str()))
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate", web::post().to(generate))
        .route("/health", web::get().to(health));
}

pub async fn run(state: AppState, config: ServerConfig) -> std::io::Result<()> {
    let host = config.host.clone().unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = config.port.unwrap_or(DEFAULT_PORT);
    let data = web::Data::new(state);

    log::info!("🌐 Listening on http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .wrap(Cors::permissive())
            .configure(routes)
    })
    .bind((host, port))?
    .run()
    .await
}
