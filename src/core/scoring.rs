use rand::Rng;
use crate::models::{ProfileRecord, ScoringParams, Style};

/// Calculate a synthetic similarity score for a profile
///
/// Scoring formula:
/// score = min(
///     base_score                       # every profile starts here
///     + style_bonus if style in tags   # tag match
///     + uniform[0, jitter),            # embedding-style noise
///     max_score
/// ), rounded to 4 decimal places
pub fn calculate_match_score<R: Rng + ?Sized>(
    style: Style,
    profile: &ProfileRecord,
    params: &ScoringParams,
    rng: &mut R,
) -> f64 {
    let mut score = params.base_score;

    if profile.has_style(style) {
        score += params.style_bonus;
    }

    score += rng.gen::<f64>() * params.jitter;

    round_score(score.min(params.max_score))
}

/// Round a score to 4 decimal places
///
/// Rounds the exact binary value of `score`, so 0.60005 (stored slightly
/// below the written decimal) becomes 0.6, not 0.6001.
#[inline]
pub fn round_score(score: f64) -> f64 {
    format!("{:.4}", score).parse().unwrap_or(score)
}
