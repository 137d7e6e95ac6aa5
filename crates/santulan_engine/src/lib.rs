//! The Santulan turn engine.
//!
//! One free-text utterance goes in; a crisis determination, a ranked
//! emotional diagnosis and a composed empathetic reply come out, while the
//! per-user rolling context and improvement trend are kept current. The
//! pipeline for an ordinary turn:
//!
//! crisis scan → emotion scoring → context load → composition →
//! context update → trend recomputation → persist.
//!
//! A crisis hit short-circuits everything after the scan.

pub mod augment;
pub mod composer;
pub mod context;
pub mod crisis;
pub mod engine;
pub mod language;
pub mod scorer;
pub mod trend;

pub use augment::{GeminiAugmentor, NoopAugmentor};
pub use composer::Composer;
pub use context::InMemoryContextStore;
pub use engine::WellnessEngine;
pub use scorer::EmotionScorer;
