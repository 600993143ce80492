pub mod feed;
pub mod nav;
pub mod notifications;
pub mod popup;
pub mod predict;
pub mod recommend;
pub mod settings;
pub mod state;

pub use feed::FeedView;
pub use nav::{Anchor, NavBar, Route, UserMenuEntry};
pub use notifications::{Notification, NotificationCenter, NotificationKind};
pub use popup::Popup;
pub use predict::{PredictView, PredictionRequest, RequestStatus, SAMPLE_TEXTS};
pub use recommend::{LoadState, RecommendView};
pub use settings::{Setting, Settings};
pub use state::ViewState;

pub mod prelude {
    pub use super::{FeedView, NavBar, PredictView, RecommendView, Route, ViewState};
}
