use crate::models::{IntentRecord, Size, Style};

/// Tokens must be longer than this (in characters) to count as keywords
const MIN_KEYWORD_LEN: usize = 4;

/// Decode a client's free-text request into an intent record
///
/// Matching is rule based and case-insensitive. Style and size are detected
/// independently; within each, the first rule that matches wins.
pub fn extract_intent(text: &str) -> IntentRecord {
    let lowered = text.to_lowercase();

    IntentRecord {
        style: detect_style(&lowered),
        size: detect_size(&lowered),
        extracted_keywords: extract_keywords(&lowered),
    }
}

/// Detect the architectural style in already lower-cased text
pub fn detect_style(lowered: &str) -> Style {
    if lowered.contains("modern") {
        Style::Modern
    } else if lowered.contains("classic") {
        Style::Classic
    } else if lowered.contains("industrial") {
        Style::Industrial
    } else if lowered.contains("eco") || lowered.contains("sustainable") {
        Style::EcoFriendly
    } else {
        Style::Unknown
    }
}

/// Detect the plot size bucket in already lower-cased text
pub fn detect_size(lowered: &str) -> Size {
    if lowered.contains("spacious") || lowered.contains("large") {
        Size::Large
    } else if lowered.contains("small") || lowered.contains("cozy") {
        Size::Small
    } else {
        Size::Standard
    }
}

/// Whitespace tokens longer than four characters, in order, duplicates and
/// punctuation kept
pub fn extract_keywords(lowered: &str) -> Vec<String> {
    lowered
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}
