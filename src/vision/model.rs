use serde::{Deserialize, Serialize};

pub const LABEL_DETECTION: &str = "LABEL_DETECTION";

#[derive(Debug, Serialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

impl BatchAnnotateImagesRequest {
    /// Single-image request asking the service for its label annotations only.
    pub fn label_detection(image_uri: &str) -> Self {
        Self {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    source: ImageSource {
                        image_uri: image_uri.to_string(),
                    },
                },
                features: vec![Feature {
                    feature_type: LABEL_DETECTION.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Image {
    pub source: ImageSource,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    pub image_uri: String,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
}

#[derive(Debug, Deserialize)]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default)]
    pub label_annotations: Vec<LabelAnnotation>,
    pub error: Option<RpcStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelAnnotation {
    pub description: String,
    pub score: f32,
}

// Per-image error the service embeds in an otherwise successful response,
// e.g. for an unreadable image locator.
#[derive(Debug, Deserialize)]
pub struct RpcStatus {
    #[serde(default)]
    pub code: i32,
    pub message: String,
}
