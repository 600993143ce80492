use async_trait::async_trait;
use fi_core::{Category, NewsItem, NewsSource, Result};

/// News source that serves a fixed list of items from memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<NewsItem>,
}

impl MemorySource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// Source pre-filled with the demo feed.
    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }
}

#[async_trait]
impl NewsSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list(&self) -> Result<Vec<NewsItem>> {
        Ok(self.items.clone())
    }
}

fn item(id: u32, title: &str, category: Category, summary: &str, image: &str, trending: bool) -> NewsItem {
    NewsItem {
        id,
        title: title.to_string(),
        category,
        summary: summary.to_string(),
        image: image.to_string(),
        trending,
    }
}

fn seed_items() -> Vec<NewsItem> {
    vec![
        item(1, "AI Breakthrough in Natural Language Processing", Category::Technology,
            "New transformer model achieves 98% accuracy in text classification.", "🤖", true),
        item(2, "Stock Market Hits All-Time High", Category::Business,
            "Major indices reach record levels as tech stocks surge.", "📈", true),
        item(3, "Championship Game Ends in Thriller", Category::Sports,
            "Team A wins the cup in overtime with a stunning goal.", "⚽", false),
        item(4, "New Blockbuster Breaks Box Office Records", Category::Entertainment,
            "Latest superhero film earns $500M in opening weekend.", "🎬", true),
        item(5, "Senate Passes Historic Climate Bill", Category::Politics,
            "Landmark legislation aims to reduce emissions by 50%.", "🏛️", false),
        item(6, "Apple Unveils Revolutionary iPhone 16", Category::Technology,
            "New AI chip promises 10x faster processing power.", "📱", true),
        item(7, "Cryptocurrency Market Rebounds Strongly", Category::Business,
            "Bitcoin surges past $60,000 as investor confidence returns.", "💰", false),
        item(8, "Olympics 2024: Record-Breaking Performances", Category::Sports,
            "Athletes shatter multiple world records in Paris.", "🏅", true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn test_seeded_source() {
        let source = MemorySource::seeded();
        let items = source.list().await.unwrap();
        assert_eq!(items.len(), 8);

        let ids: HashSet<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items[0].title, "AI Breakthrough in Natural Language Processing");
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = MemorySource::default();
        assert!(source.list().await.unwrap().is_empty());
        assert_eq!(source.name(), "memory");
    }
}
