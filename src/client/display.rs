use base64::{engine::general_purpose::STANDARD, Engine as _};
use colored::*;
use std::fs;

/// A status line shown to the user. `Error` keeps the fixed label separate
/// from the detail text so the two can be styled independently.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error { label: String, detail: String },
}

/// The display surface the submit handler drives: a status region, the
/// trigger control, an image container, and an info panel with the
/// enhanced-prompt and model fields. Injected so the handler never touches
/// a concrete UI.
pub trait SubmitDisplay {
    fn set_status(&mut self, status: Status);
    fn set_trigger(&mut self, enabled: bool, label: &str);
    fn clear_image(&mut self);
    fn show_image(&mut self, source: &str, alt: &str);
    fn hide_info(&mut self);
    fn show_info(&mut self, enhanced_prompt: &str, model_used: &str);
}

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Terminal rendition of the display surface. Images arriving as data URIs
/// are decoded and written to disk; plain URLs are printed as-is.
pub struct ConsoleDisplay;

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitDisplay for ConsoleDisplay {
    fn set_status(&mut self, status: Status) {
        match status {
            Status::Info(text) => println!("{}", text.bright_white()),
            Status::Error { label, detail } => {
                println!("{} {}", label.bright_red().bold(), detail)
            }
        }
    }

    fn set_trigger(&mut self, enabled: bool, label: &str) {
        if enabled {
            log::debug!("Trigger re-enabled: {}", label);
        } else {
            println!("{}", label.bright_black());
        }
    }

    fn clear_image(&mut self) {}

    fn show_image(&mut self, source: &str, alt: &str) {
        if let Some(encoded) = source.strip_prefix(PNG_DATA_URI_PREFIX) {
            let filename = format!("generated_image_{}.png", chrono::Utc::now().timestamp());

            match STANDARD.decode(encoded) {
                Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                    Ok(_) => {
                        println!("🖼️  {} ({})", filename.bright_green(), alt.bright_black());
                    }
                    Err(e) => {
                        log::error!("Failed to save image: {}", e);
                    }
                },
                Err(e) => {
                    log::error!("Failed to decode base64 image: {}", e);
                }
            }
        } else {
            println!("🖼️  {} ({})", source.bright_green(), alt.bright_black());
        }
    }

    fn hide_info(&mut self) {}

    fn show_info(&mut self, enhanced_prompt: &str, model_used: &str) {
        println!("{} {}", "Enhanced prompt:".bright_blue(), enhanced_prompt);
        println!("{} {}", "Model:".bright_blue(), model_used);
    }
}
