use std::sync::Arc;

use fi_core::{Error, NewsSource, Result};

pub mod backends;
pub mod catalog;

pub use backends::*;
pub use catalog::NewsCatalog;

/// Build a news source by backend name.
pub fn create_source(kind: &str) -> Result<Arc<dyn NewsSource>> {
    match kind.trim().to_ascii_lowercase().as_str() {
        "memory" | "mock" => Ok(Arc::new(MemorySource::seeded())),
        other => Err(Error::Source(format!("Unknown news source backend: {}", other))),
    }
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_source, NewsCatalog};
}
