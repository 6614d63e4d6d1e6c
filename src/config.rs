use std::env;

#[derive(Debug, Clone)]
pub struct HuggingFaceConfig {
    pub model_id: Option<String>,
    pub api_token: Option<String>,
    pub endpoint: Option<String>,
    pub guidance_scale: Option<f32>,
    pub num_inference_steps: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub huggingface: HuggingFaceConfig,
    pub demo_fallback: bool,
}

impl Default for HuggingFaceConfig {
    fn default() -> Self {
        HuggingFaceConfig {
            model_id: None,
            api_token: None,
            endpoint: None,
            guidance_scale: None,
            num_inference_steps: None,
            width: None,
            height: None,
        }
    }
}

impl HuggingFaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let model_id = env::var("HF_MODEL_ID").ok();
        let api_token = env::var("HF_API_TOKEN").ok();
        let endpoint = env::var("HF_ENDPOINT").ok();

        HuggingFaceConfig {
            model_id,
            api_token,
            endpoint,
            guidance_scale: None,
            num_inference_steps: None,
            width: None,
            height: None,
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_tuning(mut self, guidance_scale: f32, num_inference_steps: u32) -> Self {
        self.guidance_scale = Some(guidance_scale);
        self.num_inference_steps = Some(num_inference_steps);
        self
    }

    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: None,
            port: None,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("FLUXGEN_HOST").ok();
        let port = env::var("FLUXGEN_PORT").ok().and_then(|s| s.parse().ok());

        ServerConfig { host, port }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            huggingface: HuggingFaceConfig::default(),
            demo_fallback: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let demo_fallback = env::var("FLUXGEN_DEMO_FALLBACK")
            .ok()
            .map_or(true, |val| val != "false");

        Config {
            server: ServerConfig::from_env(),
            huggingface: HuggingFaceConfig::from_env(),
            demo_fallback,
        }
    }

    pub fn with_server(mut self, config: ServerConfig) -> Self {
        self.server = config;
        self
    }

    pub fn with_huggingface(mut self, config: HuggingFaceConfig) -> Self {
        self.huggingface = config;
        self
    }

    pub fn with_demo_fallback(mut self, enabled: bool) -> Self {
        self.demo_fallback = enabled;
        self
    }
}
