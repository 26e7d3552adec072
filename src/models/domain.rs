use serde::{Deserialize, Serialize};

/// Architectural style detected in a client request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    Modern,
    Classic,
    Industrial,
    #[serde(rename = "Eco-friendly")]
    EcoFriendly,
    Unknown,
}

impl Style {
    /// Label used on the wire and in profile style tags
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Modern => "Modern",
            Style::Classic => "Classic",
            Style::Industrial => "Industrial",
            Style::EcoFriendly => "Eco-friendly",
            Style::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Plot size bucket detected in a client request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "Large (1 Kanal+)")]
    Large,
    #[serde(rename = "Small (5-10 Marla)")]
    Small,
    Standard,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Large => "Large (1 Kanal+)",
            Size::Small => "Small (5-10 Marla)",
            Size::Standard => "Standard",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured intent decoded from free text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub style: Style,
    pub size: Size,
    pub extracted_keywords: Vec<String>,
}

impl Default for IntentRecord {
    fn default() -> Self {
        Self {
            style: Style::Unknown,
            size: Size::Standard,
            extracted_keywords: Vec::new(),
        }
    }
}

/// Professional profile available for matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: u32,
    pub name: String,
    pub style_tags: Vec<String>,
    pub portfolio_highlight: String,
}

impl ProfileRecord {
    pub fn has_style(&self, style: Style) -> bool {
        self.style_tags.iter().any(|tag| tag == style.as_str())
    }
}

/// Profile annotated with its per-request match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProfile {
    #[serde(flatten)]
    pub profile: ProfileRecord,
    pub match_score: f64,
}

/// Scoring parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringParams {
    pub base_score: f64,
    pub style_bonus: f64,
    pub jitter: f64,
    pub max_score: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            base_score: 0.60,
            style_bonus: 0.30,
            jitter: 0.05,
            max_score: 0.99,
        }
    }
}
