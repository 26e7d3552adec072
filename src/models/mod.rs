// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Style, Size, IntentRecord, ProfileRecord, RankedProfile, ScoringParams};
pub use requests::{AnalyzeIntentPayload, AnalyzeIntentRequest, MAX_TEXT_LENGTH};
pub use responses::{AnalyzeIntentResponse, ServiceInfoResponse, HealthResponse, ErrorResponse};
