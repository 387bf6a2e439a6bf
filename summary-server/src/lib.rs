//! Search-result summary server.
//!
//! Answers: "for this multi-leg itinerary, which stops do I board and
//! alight at, what does each boarding cost, and where do I look up
//! arrival times?"

pub mod config;
pub mod dataset;
pub mod domain;
pub mod summary;
pub mod web;
