//! Per-user conversational context: the turn update rules and an in-memory
//! reference store.
//!
//! The engine serializes turns per user id, so the store itself only needs
//! atomic whole-record reads and writes. Production deployments swap in a
//! database-backed [`ContextStore`]; this map is the reference
//! implementation and what the CLI runs on.

use async_trait::async_trait;
use santulan_core::{
    ContextStore, ConversationExchange, EmotionScore, StoreError, UserContext,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Apply one completed exchange to a user's context: dominant emotion,
/// trigger topics, mode, and the rolling window.
///
/// With no dominant emotion this turn, the previous dominant emotion and
/// mode are left untouched; the exchange still enters the window.
pub fn apply_turn(
    context: &mut UserContext,
    exchange: ConversationExchange,
    dominant: Option<&EmotionScore>,
) {
    if let Some(dominant) = dominant {
        context.dominant_emotion = Some(dominant.name.clone());
        context.mode = dominant.mode;
        for keyword in &dominant.matched_keywords {
            context.trigger_topics.insert(keyword.clone());
        }
    }
    context.push_exchange(exchange);
}

/// Keyed in-memory context store.
#[derive(Default)]
pub struct InMemoryContextStore {
    contexts: RwLock<HashMap<String, UserContext>>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a context record. Exposed for dashboards and
    /// tests.
    pub async fn len(&self) -> usize {
        self.contexts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contexts.read().await.is_empty()
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn load(&self, user_id: &str) -> Result<Option<UserContext>, StoreError> {
        Ok(self.contexts.read().await.get(user_id).cloned())
    }

    async fn save(&self, context: &UserContext) -> Result<(), StoreError> {
        self.contexts
            .write()
            .await
            .insert(context.user_id.clone(), context.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use santulan_core::Mode;

    fn exchange(message: &str, emotion: &str) -> ConversationExchange {
        ConversationExchange {
            timestamp: Utc::now(),
            user_message: message.to_string(),
            ai_response: "reply".to_string(),
            detected_emotion: emotion.to_string(),
        }
    }

    fn score(name: &str, mode: Mode, keywords: &[&str]) -> EmotionScore {
        EmotionScore {
            name: name.to_string(),
            score: 5,
            matched_keywords: keywords.iter().map(|k| k.to_string()).collect(),
            mode,
        }
    }

    #[test]
    fn dominant_turn_updates_emotion_mode_and_triggers() {
        let mut ctx = UserContext::new("u1", None);
        let dominant = score("Anger", Mode::Power, &["angry", "rage"]);
        apply_turn(&mut ctx, exchange("so angry", "Anger"), Some(&dominant));

        assert_eq!(ctx.dominant_emotion.as_deref(), Some("Anger"));
        assert_eq!(ctx.mode, Mode::Power);
        assert!(ctx.trigger_topics.contains("angry"));
        assert!(ctx.trigger_topics.contains("rage"));
        assert_eq!(ctx.recent_exchanges.len(), 1);
    }

    #[test]
    fn neutral_turn_leaves_emotion_and_mode_unchanged() {
        let mut ctx = UserContext::new("u1", None);
        let dominant = score("Anxiety", Mode::Clarity, &["worried"]);
        apply_turn(&mut ctx, exchange("worried", "Anxiety"), Some(&dominant));
        apply_turn(&mut ctx, exchange("ok then", "Unknown"), None);

        assert_eq!(ctx.dominant_emotion.as_deref(), Some("Anxiety"));
        assert_eq!(ctx.mode, Mode::Clarity);
        assert_eq!(ctx.recent_exchanges.len(), 2);
        assert_eq!(ctx.recent_exchanges[0].user_message, "ok then");
    }

    #[test]
    fn trigger_topics_deduplicate() {
        let mut ctx = UserContext::new("u1", None);
        let dominant = score("Stress", Mode::Calm, &["stress"]);
        apply_turn(&mut ctx, exchange("stress", "Stress"), Some(&dominant));
        apply_turn(&mut ctx, exchange("stress again", "Stress"), Some(&dominant));
        assert_eq!(ctx.trigger_topics.len(), 1);
    }

    #[tokio::test]
    async fn store_roundtrip() {
        let store = InMemoryContextStore::new();
        assert!(store.load("u1").await.unwrap().is_none());

        let mut ctx = UserContext::new("u1", Some("Asha"));
        ctx.push_exchange(exchange("hello", "Unknown"));
        store.save(&ctx).await.unwrap();

        let loaded = store.load("u1").await.unwrap().unwrap();
        assert_eq!(loaded, ctx);
        assert_eq!(store.len().await, 1);
    }
}
