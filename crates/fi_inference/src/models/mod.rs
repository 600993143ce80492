use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use fi_core::{ClassificationResult, ModelKind, Result};

use crate::Config;

pub mod remote;

pub use remote::ClassificationClient;

#[async_trait]
pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Classify `text` with the selected model. One request per call, no retry.
    async fn classify(&self, text: &str, model: ModelKind) -> Result<ClassificationResult>;
}

pub fn create_classifier(config: &Config) -> Result<Arc<dyn Classifier>> {
    Ok(Arc::new(ClassificationClient::new(config)?))
}
