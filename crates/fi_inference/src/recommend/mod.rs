use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use fi_core::{Category, RecommendationItem, Result};
use tracing::{info, warn};

use crate::http::ApiClient;
use crate::Config;

#[async_trait]
pub trait RecommendationSource: Send + Sync + fmt::Debug {
    /// Server recommendations for `user_id` followed by the supplemental items.
    async fn try_fetch_recommendations(&self, user_id: &str) -> Result<Vec<RecommendationItem>>;

    /// Like `try_fetch_recommendations`, but a failure is logged and yields nothing.
    async fn fetch_recommendations(&self, user_id: &str) -> Vec<RecommendationItem> {
        match self.try_fetch_recommendations(user_id).await {
            Ok(items) => items,
            Err(e) => {
                warn!("⚠️ Failed to fetch recommendations for {}: {}", user_id, e);
                Vec::new()
            }
        }
    }
}

/// Client for `GET /recommendations/{user}`.
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    api: ApiClient,
}

impl RecommendationClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }
}

#[async_trait]
impl RecommendationSource for RecommendationClient {
    async fn try_fetch_recommendations(&self, user_id: &str) -> Result<Vec<RecommendationItem>> {
        let url = self.api.endpoint(["recommendations", user_id])?;
        let server: Vec<RecommendationItem> = self.api.send_json(self.api.client().get(url)).await?;
        info!("💡 Received {} recommendations for {}", server.len(), user_id);
        Ok(merge_with_supplemental(server))
    }
}

pub fn create_recommendation_source(config: &Config) -> Result<Arc<dyn RecommendationSource>> {
    Ok(Arc::new(RecommendationClient::new(config)?))
}

/// Server items first, in server order, then the fixed supplemental items.
/// Items sharing an id or title are all kept.
pub fn merge_with_supplemental(server: Vec<RecommendationItem>) -> Vec<RecommendationItem> {
    let mut merged = server;
    merged.extend(supplemental_items());
    merged
}

pub fn supplemental_items() -> Vec<RecommendationItem> {
    [
        (101, "Understanding Large Language Models", Category::Technology, "Because you read about AI", "🧠"),
        (102, "Top 10 Investment Strategies for 2025", Category::Business, "Trending in Finance", "💸"),
        (103, "The Future of Quantum Computing", Category::Technology, "Similar to your interests", "⚛️"),
        (104, "Global Economic Outlook", Category::Business, "Popular among investors", "🌐"),
    ]
    .into_iter()
    .map(|(id, title, category, reason, image)| RecommendationItem {
        id,
        title: title.to_string(),
        category,
        reason: reason.to_string(),
        image: image.to_string(),
    })
    .collect()
}
