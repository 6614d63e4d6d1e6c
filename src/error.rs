use std::fmt;

#[derive(Debug)]
pub enum GenError {
    ConfigError(String),
    ClientError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    UpstreamError(String),
    InternalError(String),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GenError::ClientError(msg) => write!(f, "Client error: {}", msg),
            GenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            GenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            GenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GenError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            GenError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GenError {}

pub type Result<T> = std::result::Result<T, GenError>;
