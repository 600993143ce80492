use fi_core::{NewsSource, Result};
use fi_storage::NewsCatalog;

use crate::{FeedView, NavBar, NotificationCenter, PredictView, RecommendView, Settings};

/// Everything the rendering layer reads, for one session. Nothing here outlives a reload.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub feed: FeedView,
    pub predict: PredictView,
    pub recommend: RecommendView,
    pub nav: NavBar,
    pub notifications: NotificationCenter,
    pub settings: Settings,
}

impl ViewState {
    pub fn new(catalog: NewsCatalog) -> Self {
        Self {
            feed: FeedView::new(catalog),
            predict: PredictView::new(),
            recommend: RecommendView::new(),
            nav: NavBar::new(),
            notifications: NotificationCenter::seeded(),
            settings: Settings::default(),
        }
    }

    pub async fn load(source: &dyn NewsSource) -> Result<Self> {
        Ok(Self::new(NewsCatalog::load(source).await?))
    }
}
