use std::io::{self, Write};

use lambda_runtime::{Error, LambdaEvent};
use log::info;
use serde_json::Value;

use crate::report;
use crate::vision::vision_service::{LabelDetector, VisionError};

pub const IMAGE_URI: &str =
    "https://storage.googleapis.com/cloud-samples-data/vision/using_curl/shanghai.jpeg";

/// One label-detection round trip for the sample image. The request is
/// issued before anything is written, so a failed call leaves the sink
/// untouched.
pub async fn run<D: LabelDetector>(detector: &D, out: &mut impl Write) -> Result<(), VisionError> {
    let labels = detector.detect_labels(IMAGE_URI).await?;
    info!("Received {} labels for {}", labels.len(), IMAGE_URI);
    report::write_labels(out, &labels)?;
    Ok(())
}

// Hosting glue: the event payload and invocation context are ignored.
pub async fn function_handler<D: LabelDetector>(
    _event: LambdaEvent<Value>,
    detector: &D,
) -> Result<Value, Error> {
    run(detector, &mut io::stdout()).await?;
    Ok(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::model::LabelAnnotation;
    use async_trait::async_trait;
    use lambda_runtime::Context;
    use serde_json::json;

    struct StubDetector {
        labels: Vec<LabelAnnotation>,
    }

    #[async_trait]
    impl LabelDetector for StubDetector {
        async fn detect_labels(
            &self,
            _image_uri: &str,
        ) -> Result<Vec<LabelAnnotation>, VisionError> {
            Ok(self.labels.clone())
        }
    }

    struct FailingDetector;

    #[async_trait]
    impl LabelDetector for FailingDetector {
        async fn detect_labels(
            &self,
            _image_uri: &str,
        ) -> Result<Vec<LabelAnnotation>, VisionError> {
            Err(VisionError::ApiError("service unavailable".to_string()))
        }
    }

    fn stub(labels: &[(&str, f32)]) -> StubDetector {
        StubDetector {
            labels: labels
                .iter()
                .map(|(description, score)| LabelAnnotation {
                    description: description.to_string(),
                    score: *score,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn run_prints_the_labels_the_detector_returns() {
        let detector = stub(&[("Building", 0.97), ("Sky", 0.85)]);
        let mut out = Vec::new();

        run(&detector, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "########## Showing access to Vision API data ##########\n\
             Labels (and confidence score):\n\
             ==============================\n\
             Building (97.00%)\n\
             Sky (85.00%)\n"
        );
    }

    #[tokio::test]
    async fn run_still_prints_the_banner_block_without_labels() {
        let detector = stub(&[]);
        let mut out = Vec::new();

        run(&detector, &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "########## Showing access to Vision API data ##########\n\
             Labels (and confidence score):\n\
             ==============================\n"
        );
    }

    #[tokio::test]
    async fn run_writes_nothing_when_the_call_fails() {
        let mut out = Vec::new();

        let result = run(&FailingDetector, &mut out).await;

        assert!(matches!(result, Err(VisionError::ApiError(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn repeated_runs_produce_identical_output() {
        let detector = stub(&[("Building", 0.97)]);
        let mut first = Vec::new();
        let mut second = Vec::new();

        run(&detector, &mut first).await.unwrap();
        run(&detector, &mut second).await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn handler_ignores_its_event_payload() {
        let detector = stub(&[]);
        let event = LambdaEvent::new(json!({"anything": ["goes", 42]}), Context::default());

        let response = function_handler(event, &detector).await.unwrap();

        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn handler_propagates_detector_failures() {
        let event = LambdaEvent::new(Value::Null, Context::default());

        let result = function_handler(event, &FailingDetector).await;

        assert!(result.is_err());
    }
}
