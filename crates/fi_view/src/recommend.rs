use fi_core::RecommendationItem;
use fi_inference::RecommendationSource;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// Recommendation page. Fetches once per page instance.
#[derive(Debug, Clone, Default)]
pub struct RecommendView {
    state: LoadState,
    items: Vec<RecommendationItem>,
}

impl RecommendView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn items(&self) -> &[RecommendationItem] {
        &self.items
    }

    /// NotLoaded -> Loading. Any later call is refused.
    pub fn begin_load(&mut self) -> bool {
        if self.state != LoadState::NotLoaded {
            return false;
        }
        self.state = LoadState::Loading;
        true
    }

    pub fn finish_load(&mut self, items: Vec<RecommendationItem>) {
        self.items = items;
        self.state = LoadState::Loaded;
    }

    /// Fetch on first activation. A failed fetch leaves the page empty.
    ///
    /// `Loading` is only observable through `begin_load`/`finish_load`, since
    /// the page stays borrowed here. If this future is dropped before the
    /// fetch completes, the page goes back to `NotLoaded`.
    pub async fn activate(&mut self, source: &dyn RecommendationSource, user_id: &str) {
        if !self.begin_load() {
            debug!("Recommendations already requested, skipping fetch");
            return;
        }
        let mut guard = LoadingGuard { view: self };
        let items = source.fetch_recommendations(user_id).await;
        guard.view.finish_load(items);
    }
}

struct LoadingGuard<'a> {
    view: &'a mut RecommendView,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if self.view.state == LoadState::Loading {
            warn!("Recommendation fetch dropped before it finished");
            self.view.state = LoadState::NotLoaded;
        }
    }
}
