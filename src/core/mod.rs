// Core algorithm exports
pub mod catalog;
pub mod errors;
pub mod extractor;
pub mod matcher;
pub mod scoring;

pub use catalog::Catalog;
pub use errors::{CatalogError, MatchError};
pub use extractor::{extract_intent, detect_style, detect_size, extract_keywords};
pub use matcher::{Matcher, AnalysisResult};
pub use scoring::{calculate_match_score, round_score};
