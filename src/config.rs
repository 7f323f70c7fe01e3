use std::env;

use crate::vision::vision_service::VisionError;

pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl VisionConfig {
    /// Reads the service credentials from the environment. The key is
    /// required; the endpoint can be overridden for emulators.
    pub fn from_env() -> Result<Self, VisionError> {
        let api_key = env::var("GOOGLE_VISION_API_KEY").map_err(|_| {
            VisionError::ConfigError("GOOGLE_VISION_API_KEY is not set".to_string())
        })?;
        let endpoint =
            env::var("VISION_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Ok(Self { endpoint, api_key })
    }
}
