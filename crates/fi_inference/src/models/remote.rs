use async_trait::async_trait;
use fi_core::{ClassificationResult, Error, ModelKind, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use super::Classifier;
use crate::http::ApiClient;
use crate::Config;

#[derive(Serialize)]
struct PredictionRequest<'a> {
    text: &'a str,
}

/// Client for the remote `/predict/{model}` endpoints.
#[derive(Debug, Clone)]
pub struct ClassificationClient {
    api: ApiClient,
}

impl ClassificationClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    async fn request(&self, text: &str, model: ModelKind) -> Result<ClassificationResult> {
        let url = self.api.endpoint(model.endpoint().split('/'))?;
        debug!("Classifying {} chars with {} at {}", text.chars().count(), model, url);

        let request = self.api.client().post(url).json(&PredictionRequest { text });
        let result: ClassificationResult = self.api.send_json(request).await?;

        if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
            return Err(Error::InvalidResponse(format!(
                "confidence {} is outside [0, 1]",
                result.confidence
            )));
        }
        Ok(result)
    }
}

#[async_trait]
impl Classifier for ClassificationClient {
    fn name(&self) -> &str {
        "remote"
    }

    async fn classify(&self, text: &str, model: ModelKind) -> Result<ClassificationResult> {
        match self.request(text, model).await {
            Ok(result) => {
                info!(
                    "🧠 {} classified text as {} ({:.2}, {})",
                    model, result.category, result.confidence, result.model_used
                );
                Ok(result)
            }
            Err(e) => {
                error!("Classification with {} failed: {}", model, e);
                Err(e)
            }
        }
    }
}
