use serde::{Deserialize, Serialize};
use crate::models::domain::{IntentRecord, RankedProfile};

/// Response for the analyze intent endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeIntentResponse {
    pub status: String,
    pub decoded_intent: IntentRecord,
    pub recommended_professionals: Vec<RankedProfile>,
}

/// Service info returned from the root path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfoResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
