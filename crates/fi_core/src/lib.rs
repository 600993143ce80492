pub mod error;
pub mod logging;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use logging::init_logging;
pub use source::NewsSource;
pub use types::{
    Category, CategoryFilter, ClassificationResult, ModelKind, NewsItem, RecommendationItem,
};

pub mod prelude {
    pub use super::{Category, CategoryFilter, Error, NewsItem, NewsSource, Result};
}
