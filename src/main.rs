use fluxgen::server::AppState;
use fluxgen::{logger, Config, ConsoleDisplay, GenerationService, HfClient, SubmitHandler};
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let mode = env::args().nth(1).unwrap_or_else(|| "serve".to_string());

    match mode.as_str() {
        "serve" => serve().await,
        "generate" => {
            let prompt = env::args().skip(2).collect::<Vec<_>>().join(" ");
            generate(&prompt).await;
            Ok(())
        }
        other => {
            log::error!("❌ Unknown command: {}", other);
            log::info!("Usage: fluxgen [serve | generate <prompt>]");
            std::process::exit(2)
        }
    }
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    log::info!("🔍 Checking HuggingFace environment...");

    match env::var("HF_API_TOKEN") {
        Ok(token) => {
            log::info!("✅ HuggingFace API token found in environment");
            log::debug!("Token starts with: {}...", &token[..5.min(token.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  No HF_API_TOKEN in environment, inference requests will be anonymous");
            log::warn!("💡 Anonymous requests are heavily rate limited");
        }
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    let hf_client = HfClient::new(config.huggingface.clone())?;
    let service = GenerationService::new(Arc::new(hf_client.image().clone()), config.demo_fallback);

    let model_id = config
        .huggingface
        .model_id
        .clone()
        .unwrap_or_else(|| fluxgen::hf::DEFAULT_MODEL.to_string());

    logger::log_startup_info(
        "fluxgen",
        env!("CARGO_PKG_VERSION"),
        config
            .server
            .host
            .as_deref()
            .unwrap_or(fluxgen::server::DEFAULT_HOST),
        config.server.port.unwrap_or(fluxgen::server::DEFAULT_PORT),
    );

    let state = AppState {
        service: Arc::new(service),
        model_id,
    };

    fluxgen::server::run(state, config.server).await?;
    Ok(())
}

async fn generate(prompt: &str) {
    let base_url =
        env::var("FLUXGEN_URL").unwrap_or_else(|_| "http://127.0.0.1:5001".to_string());
    log::info!("🎨 Submitting prompt to {}", base_url);

    let mut handler = SubmitHandler::new(base_url, ConsoleDisplay::new());
    handler.submit(prompt).await;
}
