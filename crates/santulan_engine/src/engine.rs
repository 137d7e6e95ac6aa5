//! Turn orchestration.
//!
//! `process_message` drives one turn through the fixed sequence: input
//! validation → crisis scan → emotion scoring → context load → composition
//! → context update → trend recomputation → persist. A crisis hit returns
//! the fixed emergency payload immediately and touches nothing else.

use crate::composer::Composer;
use crate::context::{self, InMemoryContextStore};
use crate::scorer::EmotionScorer;
use crate::{augment, crisis, trend};
use arc_swap::ArcSwap;
use chrono::Utc;
use santulan_core::{
    Augmentor, ContextStore, ConversationExchange, EngineConfig, EngineError, Language, TurnReply,
    UserContext,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Everything derived from one configuration generation. Swapped as a unit
/// so a turn never sees a half-replaced config.
struct Snapshot {
    config: Arc<EngineConfig>,
    scorer: EmotionScorer,
}

impl Snapshot {
    fn build(config: EngineConfig) -> Self {
        for warning in config.validate() {
            tracing::warn!("Config gap: {}", warning);
        }
        let scorer = EmotionScorer::new(&config.emotions);
        Self {
            config: Arc::new(config),
            scorer,
        }
    }
}

/// The conversational wellness engine. One instance serves all users.
pub struct WellnessEngine {
    snapshot: ArcSwap<Snapshot>,
    store: Arc<dyn ContextStore>,
    augmentor: Arc<dyn Augmentor>,
    composer: Composer,
    /// Per-user turn serialization. Turns for the same user never interleave
    /// their read-modify-write of the context; different users run in
    /// parallel.
    user_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl WellnessEngine {
    /// Engine with the in-memory store and no generative augmentation.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(Snapshot::build(config)),
            store: Arc::new(InMemoryContextStore::new()),
            augmentor: Arc::new(augment::NoopAugmentor),
            composer: Composer::new(),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Swap in a persistent context store.
    pub fn with_store(mut self, store: Arc<dyn ContextStore>) -> Self {
        self.store = store;
        self
    }

    /// Swap in a generative augmentor.
    pub fn with_augmentor(mut self, augmentor: Arc<dyn Augmentor>) -> Self {
        self.augmentor = augmentor;
        self
    }

    /// Swap in a composer (tests inject a seeded one).
    pub fn with_composer(mut self, composer: Composer) -> Self {
        self.composer = composer;
        self
    }

    /// Current configuration generation.
    pub fn config(&self) -> Arc<EngineConfig> {
        self.snapshot.load().config.clone()
    }

    /// Hot-swap the configuration. In-flight turns finish on the snapshot
    /// they started with; new turns see the replacement.
    pub fn replace_config(&self, config: EngineConfig) {
        tracing::info!(
            categories = config.emotions.len(),
            "Replacing engine configuration"
        );
        self.snapshot.store(Arc::new(Snapshot::build(config)));
    }

    /// Session-opening line for front ends.
    pub fn greeting(&self, language: Language) -> String {
        let snapshot = self.snapshot.load();
        self.composer
            .pick_greeting(&snapshot.config.global.greetings, language)
    }

    /// Read-only context view for dashboard collaborators.
    pub async fn get_context(&self, user_id: &str) -> Result<Option<UserContext>, EngineError> {
        Ok(self.store.load(user_id).await?)
    }

    /// Process one user message end to end.
    ///
    /// Dropping the returned future before the context update has started
    /// leaves no side effects; the store applies the updated record as one
    /// atomic write, so the window is never persisted half-truncated.
    pub async fn process_message(
        &self,
        text: &str,
        user_id: &str,
        display_name: Option<&str>,
    ) -> Result<TurnReply, EngineError> {
        if text.trim().is_empty() {
            return Err(EngineError::EmptyMessage);
        }

        let snapshot = self.snapshot.load_full();

        // Crisis turns bypass scoring, composition and every context access,
        // so they succeed even when the store is down.
        if let Some(hit) = crisis::scan(&snapshot.config.crisis, text) {
            tracing::warn!(user_id, trigger = %hit.trigger, "Crisis keyword detected");
            return Ok(TurnReply {
                reply: hit.message,
                is_crisis: true,
                dominant_emotion: None,
                confidence: None,
                language: hit.language,
                mode: None,
            });
        }

        let analysis = snapshot.scorer.analyze(text);
        tracing::debug!(
            user_id,
            dominant = analysis.dominant().map(|d| d.name.as_str()).unwrap_or("none"),
            confidence = analysis.confidence,
            "Scored message"
        );

        let lock = self.user_lock(user_id).await;
        let _turn = lock.lock().await;

        let mut context = match self.store.load(user_id).await? {
            Some(existing) => existing,
            None => UserContext::new(user_id, display_name),
        };
        if context.display_name.is_none() {
            context.display_name = display_name.map(str::to_string);
        }

        let augmented = augment::bounded(
            self.augmentor.as_ref(),
            Duration::from_secs(snapshot.config.augment.timeout_secs),
            text,
            &analysis,
            &context.recent_exchanges,
        )
        .await;

        let reply = self.composer.generate(
            &snapshot.config,
            &analysis,
            context.display_name.as_deref(),
            augmented,
        );

        let exchange = ConversationExchange {
            timestamp: Utc::now(),
            user_message: text.to_string(),
            ai_response: reply.clone(),
            detected_emotion: analysis
                .dominant()
                .map(|d| d.name.clone())
                .unwrap_or_else(|| "Unknown".to_string()),
        };
        context::apply_turn(&mut context, exchange, analysis.dominant());
        trend::recompute(&mut context, &snapshot.config.emotions, Utc::now());

        self.store.save(&context).await?;

        Ok(TurnReply {
            reply,
            is_crisis: false,
            dominant_emotion: context.dominant_emotion.clone(),
            confidence: Some(analysis.confidence),
            language: analysis.language,
            mode: Some(context.mode),
        })
    }

    async fn user_lock(&self, user_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.entry(user_id.to_string()).or_default().clone()
    }
}
