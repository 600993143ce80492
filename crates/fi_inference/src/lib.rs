pub mod config;
mod http;
pub mod models;
pub mod recommend;

pub use config::{ClientArgs, Config};
pub use models::{create_classifier, ClassificationClient, Classifier};
pub use recommend::{create_recommendation_source, RecommendationClient, RecommendationSource};

pub mod prelude {
    pub use super::{ClassificationClient, Classifier, Config, RecommendationClient, RecommendationSource};
    pub use fi_core::{ClassificationResult, Error, ModelKind, RecommendationItem, Result};
}
