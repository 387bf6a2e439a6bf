//! Web layer for the search-result summary service.
//!
//! Provides HTTP endpoints for summarising itineraries against the
//! loaded dataset.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
