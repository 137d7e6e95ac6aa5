//! Improvement-trend classification over the rolling exchange window.
//!
//! Recomputed from scratch every turn once the window holds at least three
//! exchanges; this is not an incremental average.

use chrono::{DateTime, Utc};
use santulan_core::{EmotionCategory, Mode, Trend, TrendClass, UserContext};

const MIN_WINDOW: usize = 3;

/// Per-exchange score for the trend sum.
///
/// The literal labels `Motivation` (+1) and `Neutral` (0) are honored even
/// without a matching category; otherwise the label's category decides:
/// Power or Calm mode +1, Clarity 0, unknown (including `Unknown`) −1.
fn exchange_score(label: &str, categories: &[EmotionCategory]) -> i32 {
    if label == "Motivation" {
        return 1;
    }
    if label == "Neutral" {
        return 0;
    }
    match categories.iter().find(|c| c.name == label).map(|c| c.mode) {
        Some(Mode::Power) | Some(Mode::Calm) => 1,
        Some(Mode::Clarity) => 0,
        None => -1,
    }
}

/// Recompute the trend if the window is large enough; otherwise leave the
/// previous classification (if any) in place.
pub fn recompute(context: &mut UserContext, categories: &[EmotionCategory], now: DateTime<Utc>) {
    if context.recent_exchanges.len() < MIN_WINDOW {
        return;
    }
    let sum: i32 = context
        .recent_exchanges
        .iter()
        .map(|exchange| exchange_score(&exchange.detected_emotion, categories))
        .sum();
    let classification = match sum {
        s if s > 0 => TrendClass::Improving,
        s if s < 0 => TrendClass::Declining,
        _ => TrendClass::Stable,
    };
    context.trend = Some(Trend {
        classification,
        last_computed_at: now,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use santulan_core::{ConversationExchange, EngineConfig};

    fn context_with_labels(labels: &[&str]) -> UserContext {
        let mut ctx = UserContext::new("u1", None);
        for label in labels {
            ctx.push_exchange(ConversationExchange {
                timestamp: Utc::now(),
                user_message: "m".to_string(),
                ai_response: "r".to_string(),
                detected_emotion: label.to_string(),
            });
        }
        ctx
    }

    #[test]
    fn fewer_than_three_exchanges_compute_nothing() {
        let categories = EngineConfig::default().emotions;
        let mut ctx = context_with_labels(&["Anxiety", "Anxiety"]);
        recompute(&mut ctx, &categories, Utc::now());
        assert!(ctx.trend.is_none());
    }

    #[test]
    fn motivation_motivation_neutral_is_improving() {
        let categories = EngineConfig::default().emotions;
        let mut ctx = context_with_labels(&["Motivation", "Motivation", "Neutral"]);
        recompute(&mut ctx, &categories, Utc::now());
        // 1 + 1 + 0 = 2 > 0
        assert_eq!(ctx.trend.unwrap().classification, TrendClass::Improving);
    }

    #[test]
    fn unknown_labels_decline() {
        let categories = EngineConfig::default().emotions;
        let mut ctx = context_with_labels(&["Unknown", "Unknown", "Unknown"]);
        recompute(&mut ctx, &categories, Utc::now());
        assert_eq!(ctx.trend.unwrap().classification, TrendClass::Declining);
    }

    #[test]
    fn clarity_mode_categories_are_neutral() {
        let categories = EngineConfig::default().emotions;
        // Anxiety and Career are Clarity mode (0); Stress is Calm (+1)
        let mut ctx = context_with_labels(&["Anxiety", "Career", "Stress"]);
        recompute(&mut ctx, &categories, Utc::now());
        assert_eq!(ctx.trend.unwrap().classification, TrendClass::Improving);
    }

    #[test]
    fn balanced_window_is_stable() {
        let categories = EngineConfig::default().emotions;
        // Stress (Calm, +1), Unknown (−1), Neutral (0) → 0
        let mut ctx = context_with_labels(&["Stress", "Unknown", "Neutral"]);
        recompute(&mut ctx, &categories, Utc::now());
        assert_eq!(ctx.trend.unwrap().classification, TrendClass::Stable);
    }

    #[test]
    fn recomputes_over_full_window_each_turn() {
        let categories = EngineConfig::default().emotions;
        let mut ctx = context_with_labels(&["Unknown", "Unknown", "Unknown", "Unknown"]);
        recompute(&mut ctx, &categories, Utc::now());
        assert_eq!(
            ctx.trend.as_ref().unwrap().classification,
            TrendClass::Declining
        );

        // Five positive turns push the negatives out of the window
        for label in ["Motivation", "Anger", "Anger", "Anger", "Anger"] {
            ctx.push_exchange(ConversationExchange {
                timestamp: Utc::now(),
                user_message: "m".to_string(),
                ai_response: "r".to_string(),
                detected_emotion: label.to_string(),
            });
        }
        recompute(&mut ctx, &categories, Utc::now());
        assert_eq!(
            ctx.trend.unwrap().classification,
            TrendClass::Improving
        );
    }
}
