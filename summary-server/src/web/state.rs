//! Application state for the web layer.

use std::sync::Arc;

use crate::dataset::DatasetStore;
use crate::domain::Language;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current route/stop snapshot
    pub dataset: DatasetStore,

    /// Language used when a stop has no name in the requested one
    pub default_language: Arc<Language>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(dataset: DatasetStore, default_language: Language) -> Self {
        Self {
            dataset,
            default_language: Arc::new(default_language),
        }
    }
}
