use async_trait::async_trait;
use reqwest::Client as HttpClient;
use thiserror::Error;
use url::Url;

use crate::config::VisionConfig;
use crate::vision::model::{
    BatchAnnotateImagesRequest, BatchAnnotateImagesResponse, LabelAnnotation,
};

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("URL parsing failed: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Vision API error: {0}")]
    ApiError(String),
    #[error("Missing configuration: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// One capability: annotate an image locator, return its label records.
#[async_trait]
pub trait LabelDetector: Send + Sync {
    async fn detect_labels(&self, image_uri: &str) -> Result<Vec<LabelAnnotation>, VisionError>;
}

#[derive(Clone)]
pub struct VisionService {
    http_client: HttpClient,
    config: VisionConfig,
}

impl VisionService {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            http_client: HttpClient::new(),
            config,
        }
    }

    fn annotate_url(&self) -> Result<Url, VisionError> {
        let mut url = Url::parse(&format!("{}/v1/images:annotate", self.config.endpoint))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl LabelDetector for VisionService {
    async fn detect_labels(&self, image_uri: &str) -> Result<Vec<LabelAnnotation>, VisionError> {
        let request = BatchAnnotateImagesRequest::label_detection(image_uri);

        let response = self
            .http_client
            .post(self.annotate_url()?)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await?;
            return Err(VisionError::ApiError(format!(
                "Annotate request failed: {}",
                error_text
            )));
        }

        let body = response.text().await?;
        let batch: BatchAnnotateImagesResponse = serde_json::from_str(&body)?;
        first_image_labels(batch)
    }
}

fn first_image_labels(
    batch: BatchAnnotateImagesResponse,
) -> Result<Vec<LabelAnnotation>, VisionError> {
    let annotated = batch
        .responses
        .into_iter()
        .next()
        .ok_or_else(|| VisionError::ApiError("empty annotate response batch".to_string()))?;

    if let Some(status) = annotated.error {
        return Err(VisionError::ApiError(format!(
            "{} (code {})",
            status.message, status.code
        )));
    }

    Ok(annotated.label_annotations)
}
