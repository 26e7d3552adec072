use actix_web::{web, HttpResponse};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Instrument;
use validator::Validate;
use crate::core::{Catalog, Matcher};
use crate::models::{AnalyzeIntentPayload, AnalyzeIntentResponse};
use crate::routes::errors::ApiError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub matcher: Matcher,
}

impl AppState {
    pub fn new(catalog: Catalog, matcher: Matcher) -> Self {
        Self { catalog, matcher }
    }
}

/// Configure intent analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/analyze-intent", web::post().to(analyze_intent));
}

/// Analyze intent endpoint
///
/// POST /api/v1/analyze-intent
///
/// Request body:
/// ```json
/// {
///   "text": "I want a spacious modern home"
/// }
/// ```
async fn analyze_intent(
    state: web::Data<AppState>,
    payload: web::Json<AnalyzeIntentPayload>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner().into_request();

    if let Err(errors) = req.validate() {
        // Field names only; the rejected value is never logged or echoed
        let fields: Vec<_> = errors.field_errors().into_keys().collect();
        tracing::info!("Validation failed for analyze_intent request: fields={:?}", fields);
        return Err(ApiError::TextTooLong);
    }

    let text = req.text.ok_or(ApiError::MissingText)?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analyze_intent", %request_id);

    async move {
        // Fresh entropy per request, nothing shared across workers
        let mut rng = StdRng::from_entropy();
        let result = state
            .matcher
            .analyze(&text, state.catalog.profiles(), &mut rng)?;

        tracing::info!(
            "Decoded style={} size={} keywords={}; top match: {}",
            result.decoded_intent.style,
            result.decoded_intent.size,
            result.decoded_intent.extracted_keywords.len(),
            result
                .recommended_professionals
                .first()
                .map(|r| r.profile.name.as_str())
                .unwrap_or("none"),
        );

        Ok::<_, ApiError>(HttpResponse::Ok().json(AnalyzeIntentResponse {
            status: "success".to_string(),
            decoded_intent: result.decoded_intent,
            recommended_professionals: result.recommended_professionals,
        }))
    }
    .instrument(span)
    .await
}
