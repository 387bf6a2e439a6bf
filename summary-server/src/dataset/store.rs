//! Shared, reloadable dataset snapshot.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::error::DatasetError;
use super::snapshot::Dataset;

/// Summary of the currently loaded snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetInfo {
    /// Number of routes
    pub routes: usize,
    /// Number of stops
    pub stops: usize,
    /// When the snapshot was loaded
    pub loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Loaded {
    dataset: Arc<Dataset>,
    loaded_at: DateTime<Utc>,
}

impl Loaded {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            loaded_at: Utc::now(),
        }
    }

    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            routes: self.dataset.route_count(),
            stops: self.dataset.stop_count(),
            loaded_at: self.loaded_at,
        }
    }
}

/// Thread-safe holder of the current dataset snapshot.
///
/// Readers get an `Arc<Dataset>` and resolve against it without holding
/// the lock, so a reload never changes the tables under an in-flight
/// request.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    inner: Arc<RwLock<Loaded>>,
    path: PathBuf,
}

impl DatasetStore {
    /// Load the dataset file at `path`.
    ///
    /// This fails if the file is missing or malformed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DatasetError> {
        let path = path.into();
        let dataset = Dataset::read(&path).await?;
        let loaded = Loaded::new(dataset);
        info!(
            path = %path.display(),
            routes = loaded.dataset.route_count(),
            stops = loaded.dataset.stop_count(),
            "loaded dataset"
        );

        Ok(Self {
            inner: Arc::new(RwLock::new(loaded)),
            path,
        })
    }

    /// Wrap an already-built dataset.
    ///
    /// `path` is where [`reload`](Self::reload) reads from.
    pub fn from_dataset(dataset: Dataset, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Loaded::new(dataset))),
            path: path.into(),
        }
    }

    /// Returns the current snapshot.
    pub async fn current(&self) -> Arc<Dataset> {
        let guard = self.inner.read().await;
        Arc::clone(&guard.dataset)
    }

    /// Returns counts and load time of the current snapshot.
    pub async fn info(&self) -> DatasetInfo {
        let guard = self.inner.read().await;
        guard.info()
    }

    /// Path the dataset is loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the dataset file.
    ///
    /// On success, replaces the current snapshot. On failure, the existing
    /// snapshot is preserved and the error is returned.
    pub async fn reload(&self) -> Result<DatasetInfo, DatasetError> {
        debug!(path = %self.path.display(), "reloading dataset");
        let dataset = Dataset::read(&self.path).await?;
        let loaded = Loaded::new(dataset);
        let info = loaded.info();

        let mut guard = self.inner.write().await;
        *guard = loaded;

        Ok(info)
    }
}
