//! Immutable in-memory news catalog with category and text queries.

use fi_core::{CategoryFilter, NewsItem, NewsSource, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct NewsCatalog {
    items: Vec<NewsItem>,
}

impl NewsCatalog {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// Snapshot a source once. The catalog never goes back to it.
    pub async fn load(source: &dyn NewsSource) -> Result<Self> {
        let items = source.list().await?;
        info!("📰 Loaded {} news items from {}", items.len(), source.name());
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Filter by a raw tab value (`"all"` or a category name) and search text.
    ///
    /// A category value that names no known category yields an empty result.
    pub fn query(&self, category: &str, search: &str) -> Vec<NewsItem> {
        match category.parse::<CategoryFilter>() {
            Ok(filter) => self.query_filter(filter, search),
            Err(_) => {
                debug!("Unknown category filter {:?}, nothing matches", category);
                Vec::new()
            }
        }
    }

    pub fn query_filter(&self, filter: CategoryFilter, search: &str) -> Vec<NewsItem> {
        let needle = search.to_lowercase();
        self.items
            .iter()
            .filter(|item| filter.matches(item.category) && item.mentions(&needle))
            .cloned()
            .collect()
    }

    /// First trending item, else the first item.
    pub fn featured(items: &[NewsItem]) -> Option<&NewsItem> {
        items.iter().find(|item| item.trending).or_else(|| items.first())
    }
}
