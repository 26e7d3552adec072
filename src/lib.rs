//! ArchIntent - intent extraction and architect matching service
//!
//! Decodes a client's free-text request into a coarse intent (style, plot
//! size, keywords) and ranks a catalog of architects against it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use core::{Catalog, Matcher, AnalysisResult, extract_intent};
pub use models::{IntentRecord, ProfileRecord, RankedProfile, ScoringParams, Style, Size};
