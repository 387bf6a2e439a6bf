//! Route/stop dataset loading.
//!
//! Provides the route and stop tables read from the transit database's
//! JSON export, held as an immutable snapshot that can be reloaded in
//! the background.

mod error;
mod snapshot;
mod store;

pub use error::DatasetError;
pub use snapshot::Dataset;
pub use store::{DatasetInfo, DatasetStore};

#[cfg(test)]
pub(crate) use snapshot::SAMPLE;
