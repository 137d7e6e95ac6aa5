//! Data model shared across the engine and its collaborators.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The rolling conversation window holds exactly this many exchanges.
pub const RECENT_WINDOW: usize = 5;

/// Supported languages. Detection is a single rule: any Devanagari codepoint
/// (U+0900–U+097F) anywhere in the text means Hindi, otherwise English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Hi => write!(f, "hi"),
        }
    }
}

/// Coarse response-tone tag attached to each emotion category and carried
/// into [`UserContext`] to bias downstream behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Calm,
    Clarity,
    Power,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Calm => write!(f, "Calm"),
            Mode::Clarity => write!(f, "Clarity"),
            Mode::Power => write!(f, "Power"),
        }
    }
}

/// One emotion category's showing against a single input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub name: String,
    pub score: u32,
    /// Keywords from the lexicon that matched at least once.
    pub matched_keywords: Vec<String>,
    pub mode: Mode,
}

/// Result of scoring one input text against every emotion category.
///
/// `detected` is sorted by score descending; equal scores keep lexicon order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub language: Language,
    pub detected: Vec<EmotionScore>,
    /// `min(top_score / 5, 1.0)`, or 0.0 when nothing scored.
    pub confidence: f32,
    /// True when at least two categories scored and the top two are within 2
    /// points of each other.
    pub is_mixed: bool,
}

impl AnalysisResult {
    /// The highest-scoring category, if any category scored at all.
    pub fn dominant(&self) -> Option<&EmotionScore> {
        self.detected.first()
    }
}

/// A crisis-lexicon hit. Carries the fixed emergency reply for the detected
/// language; the rest of the pipeline never runs for a crisis turn.
#[derive(Debug, Clone, PartialEq)]
pub struct CrisisHit {
    pub trigger: String,
    pub message: String,
    pub language: Language,
}

/// One user/engine exchange. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationExchange {
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub ai_response: String,
    /// Dominant category name for the turn, or `"Unknown"`.
    pub detected_emotion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendClass {
    Improving,
    Stable,
    Declining,
}

impl fmt::Display for TrendClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrendClass::Improving => write!(f, "improving"),
            TrendClass::Stable => write!(f, "stable"),
            TrendClass::Declining => write!(f, "declining"),
        }
    }
}

/// Improvement trend over the rolling exchange window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub classification: TrendClass,
    pub last_computed_at: DateTime<Utc>,
}

/// Per-user conversational memory. One record per user id, created lazily on
/// the first message and never deleted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserContext {
    pub user_id: String,
    pub display_name: Option<String>,
    /// Last computed dominant emotion name. Survives turns where nothing
    /// scored.
    pub dominant_emotion: Option<String>,
    /// Newest first, capacity [`RECENT_WINDOW`]; inserting evicts the oldest.
    pub recent_exchanges: Vec<ConversationExchange>,
    /// Matched keywords accumulated across turns as long-lived concern
    /// signals. Set semantics.
    pub trigger_topics: BTreeSet<String>,
    pub mode: Mode,
    pub trend: Option<Trend>,
}

impl UserContext {
    pub fn new(user_id: &str, display_name: Option<&str>) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: display_name.map(str::to_string),
            dominant_emotion: None,
            recent_exchanges: Vec::new(),
            trigger_topics: BTreeSet::new(),
            mode: Mode::default(),
            trend: None,
        }
    }

    /// Prepend an exchange, evicting the oldest once the window is full.
    pub fn push_exchange(&mut self, exchange: ConversationExchange) {
        self.recent_exchanges.insert(0, exchange);
        self.recent_exchanges.truncate(RECENT_WINDOW);
    }
}

/// What `process_message` hands back to the calling collaborator.
///
/// Crisis turns carry only the fixed emergency reply; `dominant_emotion`,
/// `confidence` and `mode` are populated for ordinary turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReply {
    pub reply: String,
    pub is_crisis: bool,
    pub dominant_emotion: Option<String>,
    pub confidence: Option<f32>,
    pub language: Language,
    pub mode: Option<Mode>,
}
