//! Home feed: category tabs, search box, featured story and the article dialog.

use fi_core::{CategoryFilter, NewsItem};
use fi_storage::NewsCatalog;
use tracing::debug;

use crate::Popup;

#[derive(Debug, Clone)]
pub struct FeedView {
    catalog: NewsCatalog,
    category: String,
    search: String,
    visible: Vec<NewsItem>,
    pub dialog: Popup<NewsItem>,
}

impl FeedView {
    pub fn new(catalog: NewsCatalog) -> Self {
        let mut view = Self {
            catalog,
            category: CategoryFilter::WILDCARD.to_string(),
            search: String::new(),
            visible: Vec::new(),
            dialog: Popup::Closed,
        };
        view.apply_filter();
        view
    }

    pub fn catalog(&self) -> &NewsCatalog {
        &self.catalog
    }

    /// Raw value of the active tab.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Active tab as a filter, `None` when the tab names no known category.
    pub fn active_filter(&self) -> Option<CategoryFilter> {
        self.category.parse().ok()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn select_category(&mut self, tab: &str) {
        self.category = tab.to_string();
        self.apply_filter();
    }

    pub fn select_filter(&mut self, filter: CategoryFilter) {
        self.select_category(&filter.to_string());
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.visible = self.catalog.query(&self.category, &self.search);
        debug!(
            "Feed filter category={:?} search={:?} -> {} items",
            self.category,
            self.search,
            self.visible.len()
        );
    }

    pub fn visible(&self) -> &[NewsItem] {
        &self.visible
    }

    pub fn featured(&self) -> Option<&NewsItem> {
        NewsCatalog::featured(&self.visible)
    }

    /// Open the detail dialog for the item with `id`. Returns false for unknown ids.
    pub fn read_more(&mut self, id: u32) -> bool {
        match self.catalog.get(id) {
            Some(item) => {
                let item = item.clone();
                debug!("Opening article {} ({})", item.id, item.title);
                self.dialog.open(item);
                true
            }
            None => false,
        }
    }

    /// Close button and backdrop click both land here.
    pub fn close_article(&mut self) {
        self.dialog.close();
    }

    pub fn selected_article(&self) -> Option<&NewsItem> {
        self.dialog.payload()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fi_core::Category;
    use fi_storage::MemorySource;

    fn view() -> FeedView {
        FeedView::new(NewsCatalog::new(MemorySource::seeded().items().to_vec()))
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let view = view();
        assert_eq!(view.category(), "all");
        assert_eq!(view.active_filter(), Some(CategoryFilter::All));
        assert_eq!(view.visible().len(), 8);
        assert_eq!(view.featured().map(|i| i.id), Some(1));
        assert!(view.selected_article().is_none());
    }

    #[test]
    fn test_unknown_tab_shows_nothing() {
        let mut view = view();
        view.select_category("Weather");
        assert_eq!(view.active_filter(), None);
        assert!(view.visible().is_empty());
        assert!(view.featured().is_none());
    }

    #[test]
    fn test_select_filter() {
        let mut view = view();
        view.select_filter(CategoryFilter::Only(Category::Entertainment));
        assert_eq!(view.category(), "Entertainment");
        assert_eq!(view.visible().len(), 1);
        assert_eq!(view.featured().map(|i| i.id), Some(4));
    }

    #[test]
    fn test_read_more_unknown_id() {
        let mut view = view();
        assert!(!view.read_more(42));
        assert!(!view.dialog.is_open());
    }
}
