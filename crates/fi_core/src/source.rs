use async_trait::async_trait;
use crate::types::NewsItem;
use crate::Result;

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the backend, used in log lines
    fn name(&self) -> &str;

    /// List every news item, in feed order
    async fn list(&self) -> Result<Vec<NewsItem>>;
}
