use rand::Rng;
use crate::models::{IntentRecord, ProfileRecord, RankedProfile, ScoringParams};
use crate::core::{
    errors::MatchError,
    extractor::extract_intent,
    scoring::calculate_match_score,
};

/// Result of analyzing one client request
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub decoded_intent: IntentRecord,
    pub recommended_professionals: Vec<RankedProfile>,
}

/// Ranks catalog profiles against a decoded intent
///
/// # Pipeline Stages
/// 1. Intent extraction
/// 2. Per-profile scoring
/// 3. Ranking (descending score, catalog order on ties)
#[derive(Debug, Clone)]
pub struct Matcher {
    params: ScoringParams,
}

impl Matcher {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    pub fn with_default_params() -> Self {
        Self {
            params: ScoringParams::default(),
        }
    }

    pub fn params(&self) -> &ScoringParams {
        &self.params
    }

    /// Score every catalog profile and sort by score descending
    ///
    /// Each profile is scored independently. Randomness comes only from `rng`,
    /// so a seeded or constant generator makes ranking reproducible.
    pub fn rank<R: Rng + ?Sized>(
        &self,
        intent: &IntentRecord,
        catalog: &[ProfileRecord],
        rng: &mut R,
    ) -> Result<Vec<RankedProfile>, MatchError> {
        if catalog.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }

        let mut ranked: Vec<RankedProfile> = catalog
            .iter()
            .map(|profile| RankedProfile {
                match_score: calculate_match_score(intent.style, profile, &self.params, &mut *rng),
                profile: profile.clone(),
            })
            .collect();

        // Stable sort keeps catalog order for equal scores
        ranked.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(ranked)
    }

    /// Extract the intent from `text` and rank the catalog against it
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        text: &str,
        catalog: &[ProfileRecord],
        rng: &mut R,
    ) -> Result<AnalysisResult, MatchError> {
        let decoded_intent = extract_intent(text);
        let recommended_professionals = self.rank(&decoded_intent, catalog, rng)?;

        Ok(AnalysisResult {
            decoded_intent,
            recommended_professionals,
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_params()
    }
}
