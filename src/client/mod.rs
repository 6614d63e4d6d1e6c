//! Submit client: drives one request/response cycle against the server and
//! renders the result through an injected display surface.

pub mod display;

use crate::{
    error::{GenError, Result},
    models::{GenerateRequest, GenerateResponse, GenerationOutcome},
};

pub use display::{ConsoleDisplay, Status, SubmitDisplay};

pub const IDLE_LABEL: &str = "Generate Image";
pub const BUSY_LABEL: &str = "Generating... (Please Wait)";
pub const PROMPT_REQUIRED: &str = "Please enter a prompt!";
pub const REQUEST_IN_FLIGHT: &str = "Sending request to AI... This may take up to 90 seconds.";
pub const SUCCESS_FALLBACK: &str = "Image generated successfully!";
pub const FAILURE_LABEL: &str = "Generation Failed:";
pub const UNKNOWN_ERROR: &str = "Unknown error occurred.";
pub const NETWORK_ERROR_LABEL: &str = "Network Error:";
pub const NETWORK_ERROR_DETAIL: &str =
    "Could not connect to the generation server. Is the fluxgen server running?";
pub const MODEL_FALLBACK: &str = "Unknown/Fallback";
pub const FAILURE_MODEL_LABEL: &str = "Error/Fallback Mode";
pub const PLACEHOLDER_ALT: &str = "Placeholder Image";

const ALT_TEXT_CHARS: usize = 50;

/// One submission at a time: the in-flight flag is checked at entry and
/// cleared in the finalization step, independent of the trigger label.
pub struct SubmitHandler<D: SubmitDisplay> {
    http: reqwest::Client,
    base_url: String,
    display: D,
    in_flight: bool,
}

impl<D: SubmitDisplay> SubmitHandler<D> {
    pub fn new(base_url: impl Into<String>, display: D) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            display,
            in_flight: false,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Run one full submission cycle. The trimmed prompt is validated
    /// before any display mutation; every path that passes validation ends
    /// in the finalization step restoring the trigger.
    pub async fn submit(&mut self, raw_prompt: &str) {
        if self.in_flight {
            return;
        }

        let prompt = raw_prompt.trim();
        if prompt.is_empty() {
            self.display.set_status(Status::Info(PROMPT_REQUIRED.into()));
            return;
        }

        self.in_flight = true;
        self.display.set_status(Status::Info(REQUEST_IN_FLIGHT.into()));
        self.display.set_trigger(false, BUSY_LABEL);
        self.display.clear_image();
        self.display.hide_info();

        match self.request(prompt).await {
            Ok(outcome) => self.render(outcome),
            Err(e) => {
                // Transport failures and malformed bodies land here; the
                // detail stays in the log, not on the status line.
                log::error!("Generate request failed: {}", e);
                self.display.set_status(Status::Error {
                    label: NETWORK_ERROR_LABEL.into(),
                    detail: NETWORK_ERROR_DETAIL.into(),
                });
            }
        }

        self.display.set_trigger(true, IDLE_LABEL);
        self.in_flight = false;
    }

    async fn request(&self, prompt: &str) -> Result<GenerationOutcome> {
        let url = format!("{}/generate", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(url)
            .json(&GenerateRequest {
                prompt: prompt.to_string(),
            })
            .send()
            .await
            .map_err(|e| GenError::RequestError(e.to_string()))?;

        let wire: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenError::ResponseError(e.to_string()))?;

        GenerationOutcome::try_from(wire)
    }

    fn render(&mut self, outcome: GenerationOutcome) {
        match outcome {
            GenerationOutcome::Success {
                message,
                image,
                enhanced_prompt,
                model_used,
            } => {
                self.display.set_status(Status::Info(
                    message.unwrap_or_else(|| SUCCESS_FALLBACK.to_string()),
                ));
                self.display.show_image(&image, &alt_text(&enhanced_prompt));
                self.display.show_info(
                    &enhanced_prompt,
                    model_used.as_deref().unwrap_or(MODEL_FALLBACK),
                );
            }
            GenerationOutcome::Failure {
                error,
                enhanced_prompt,
                image,
            } => {
                self.display.set_status(Status::Error {
                    label: FAILURE_LABEL.into(),
                    detail: error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
                });
                if let Some(enhanced) = enhanced_prompt {
                    self.display.show_info(&enhanced, FAILURE_MODEL_LABEL);
                }
                if let Some(image) = image {
                    self.display.show_image(&image, PLACEHOLDER_ALT);
                }
            }
        }
    }
}

/// First 50 characters of the enhanced prompt plus an ellipsis marker,
/// counted in characters so multi-byte text is never split.
fn alt_text(enhanced_prompt: &str) -> String {
    let head: String = enhanced_prompt.chars().take(ALT_TEXT_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Status(Status),
        Trigger(bool, String),
        ClearImage,
        ShowImage { source: String, alt: String },
        HideInfo,
        ShowInfo { enhanced_prompt: String, model: String },
    }

    /// Records every call and mirrors the resulting display state, so tests
    /// can assert on ordering and on the final state independently.
    #[derive(Default)]
    struct RecordingDisplay {
        events: Vec<Event>,
        status: Option<Status>,
        trigger: Option<(bool, String)>,
        image: Option<(String, String)>,
        info: Option<(String, String)>,
    }

    impl SubmitDisplay for RecordingDisplay {
        fn set_status(&mut self, status: Status) {
            self.events.push(Event::Status(status.clone()));
            self.status = Some(status);
        }

        fn set_trigger(&mut self, enabled: bool, label: &str) {
            self.events.push(Event::Trigger(enabled, label.to_string()));
            self.trigger = Some((enabled, label.to_string()));
        }

        fn clear_image(&mut self) {
            self.events.push(Event::ClearImage);
            self.image = None;
        }

        fn show_image(&mut self, source: &str, alt: &str) {
            self.events.push(Event::ShowImage {
                source: source.to_string(),
                alt: alt.to_string(),
            });
            self.image = Some((source.to_string(), alt.to_string()));
        }

        fn hide_info(&mut self) {
            self.events.push(Event::HideInfo);
            self.info = None;
        }

        fn show_info(&mut self, enhanced_prompt: &str, model_used: &str) {
            self.events.push(Event::ShowInfo {
                enhanced_prompt: enhanced_prompt.to_string(),
                model: model_used.to_string(),
            });
            self.info = Some((enhanced_prompt.to_string(), model_used.to_string()));
        }
    }

    fn handler() -> SubmitHandler<RecordingDisplay> {
        // Port 1 is never listening; only the short-circuit and transport
        // failure tests actually hit the network.
        SubmitHandler::new("http://127.0.0.1:1", RecordingDisplay::default())
    }

    fn wire(json: &str) -> GenerationOutcome {
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        GenerationOutcome::try_from(response).unwrap()
    }

    #[tokio::test]
    async fn test_blank_prompt_short_circuits() {
        for raw in ["", "   ", "\t\n "] {
            let mut handler = handler();
            handler.submit(raw).await;

            // Only the status line changes; no trigger, image, or panel
            // mutation, and no network call (the endpoint is unroutable).
            assert_eq!(
                handler.display.events,
                vec![Event::Status(Status::Info(PROMPT_REQUIRED.into()))]
            );
            assert!(handler.display.trigger.is_none());
            assert!(!handler.in_flight);
        }
    }

    #[tokio::test]
    async fn test_in_flight_submission_is_ignored() {
        let mut handler = handler();
        handler.in_flight = true;

        handler.submit("a dragon").await;

        assert!(handler.display.events.is_empty());
    }

    #[test]
    fn test_alt_text_truncates_at_50_chars() {
        let long = "x".repeat(120);
        let alt = alt_text(&long);
        assert_eq!(alt, format!("{}...", "x".repeat(50)));

        // Character-based, not byte-based
        let emoji = "🎨".repeat(60);
        let alt = alt_text(&emoji);
        assert_eq!(alt.chars().count(), 53);
        assert!(alt.ends_with("..."));

        // Short prompts still get the ellipsis marker
        assert_eq!(alt_text("cat"), "cat...");
    }

    #[test]
    fn test_success_render_uses_alt_and_panel() {
        let enhanced = "a dragon, mythic atmosphere, rich world-building details";
        let mut handler = handler();

        handler.render(wire(&format!(
            r#"{{
                "success": true,
                "image": "data:image/png;base64,AAAA",
                "enhanced_prompt": "{}",
                "model_used": "flux-1"
            }}"#,
            enhanced
        )));

        let display = &handler.display;
        assert_eq!(
            display.status,
            Some(Status::Info(SUCCESS_FALLBACK.into())),
            "missing message falls back to the fixed success string"
        );
        let (source, alt) = display.image.clone().unwrap();
        assert_eq!(source, "data:image/png;base64,AAAA");
        assert_eq!(alt, format!("{}...", &enhanced[..50]));
        assert_eq!(
            display.info,
            Some((enhanced.to_string(), "flux-1".to_string()))
        );
    }

    #[test]
    fn test_success_render_prefers_server_message_and_model_fallback() {
        let mut handler = handler();

        handler.render(wire(
            r#"{
                "success": true,
                "message": "All done!",
                "image": "data:image/png;base64,AAAA",
                "enhanced_prompt": "a cat"
            }"#,
        ));

        assert_eq!(
            handler.display.status,
            Some(Status::Info("All done!".into()))
        );
        assert_eq!(
            handler.display.info,
            Some(("a cat".to_string(), MODEL_FALLBACK.to_string()))
        );
    }

    #[test]
    fn test_failure_render_falls_back_to_unknown_error() {
        let mut handler = handler();

        handler.render(wire(r#"{"success": false}"#));

        assert_eq!(
            handler.display.status,
            Some(Status::Error {
                label: FAILURE_LABEL.into(),
                detail: UNKNOWN_ERROR.into(),
            }),
            "label and detail stay separate fields"
        );
        assert!(handler.display.image.is_none());
        assert!(handler.display.info.is_none());
    }

    #[test]
    fn test_failure_render_keeps_partial_diagnostics() {
        let mut handler = handler();

        handler.render(wire(
            r#"{
                "success": false,
                "error": "model offline",
                "enhanced_prompt": "a cat, sharp detail",
                "image": "data:image/png;base64,BBBB"
            }"#,
        ));

        let display = &handler.display;
        assert_eq!(
            display.status,
            Some(Status::Error {
                label: FAILURE_LABEL.into(),
                detail: "model offline".into(),
            })
        );
        assert_eq!(
            display.info,
            Some(("a cat, sharp detail".to_string(), FAILURE_MODEL_LABEL.to_string()))
        );
        let (_, alt) = display.image.clone().unwrap();
        assert_eq!(alt, PLACEHOLDER_ALT, "alt text is fixed, not prompt-derived");
    }

    #[tokio::test]
    async fn test_transport_failure_restores_trigger() {
        let mut handler = handler();

        handler.submit("a dragon").await;

        let events = &handler.display.events;
        assert_eq!(
            events[0],
            Event::Status(Status::Info(REQUEST_IN_FLIGHT.into()))
        );
        assert_eq!(events[1], Event::Trigger(false, BUSY_LABEL.into()));
        assert_eq!(events[2], Event::ClearImage);
        assert_eq!(events[3], Event::HideInfo);
        assert_eq!(
            events[4],
            Event::Status(Status::Error {
                label: NETWORK_ERROR_LABEL.into(),
                detail: NETWORK_ERROR_DETAIL.into(),
            })
        );
        assert_eq!(events[5], Event::Trigger(true, IDLE_LABEL.into()));
        assert!(!handler.in_flight);
    }

    #[tokio::test]
    async fn test_repeated_submission_is_idempotent() {
        // Two identical cycles against an unreachable server leave the
        // display in an identical final state, with the image region
        // cleared at the start of each cycle.
        let mut handler = handler();
        handler.submit("a dragon").await;
        let first_events = handler.display.events.clone();

        handler.submit("a dragon").await;

        assert_eq!(handler.display.events.len(), first_events.len() * 2);
        assert_eq!(&handler.display.events[first_events.len()..], &first_events[..]);
        assert_eq!(
            handler.display.trigger,
            Some((true, IDLE_LABEL.to_string()))
        );
        assert!(handler.display.image.is_none());
    }
}
