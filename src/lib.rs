pub mod client;
pub mod config;
pub mod enhance;
pub mod error;
pub mod hf;
pub mod logger;
pub mod models;
pub mod placeholder;
pub mod server;
pub mod service;

pub use client::{ConsoleDisplay, Status, SubmitDisplay, SubmitHandler};
pub use config::{Config, HuggingFaceConfig, ServerConfig};
pub use error::{GenError, Result};
pub use hf::{HfClient, ImageClient, TextToImage};
pub use models::*;
pub use service::GenerationService;
