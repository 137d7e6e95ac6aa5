pub mod config;
pub mod defaults;
pub mod error;
pub mod types;

pub use config::{
    AugmentConfig, Bilingual, CrisisLexicon, EmotionCategory, EngineConfig, GlobalTemplates,
    LexiconEntry, TemplateSet,
};
pub use error::{EngineError, StoreError};
pub use types::{
    AnalysisResult, ConversationExchange, CrisisHit, EmotionScore, Language, Mode, Trend,
    TrendClass, TurnReply, UserContext, RECENT_WINDOW,
};

use async_trait::async_trait;

/// Collaborator responsible for persisting per-user conversational context.
///
/// The engine serializes turns per user id, so implementations only need to
/// make each `load`/`save` call atomic on its own. Failures surface to the
/// caller of `process_message` — a silently lost context update would corrupt
/// the rolling window and trend computation.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn load(&self, user_id: &str) -> Result<Option<UserContext>, StoreError>;
    async fn save(&self, context: &UserContext) -> Result<(), StoreError>;
}

/// Optional generative collaborator for the reflection+insight slot of a
/// composed reply.
///
/// `Ok(None)` and `Err(_)` both mean "unavailable": the composer falls back
/// to its rule-based templates and the end user never sees the failure.
#[async_trait]
pub trait Augmentor: Send + Sync {
    async fn augment(
        &self,
        user_message: &str,
        analysis: &AnalysisResult,
        recent: &[ConversationExchange],
    ) -> anyhow::Result<Option<String>>;
}
