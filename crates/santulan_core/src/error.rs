//! Error taxonomy for the engine surface.

use thiserror::Error;

/// Failure reported by a [`crate::ContextStore`] implementation.
#[derive(Debug, Clone, Error)]
#[error("context store failure: {0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors a `process_message` caller can see.
///
/// Augmentation failures and template/lexicon gaps never appear here: the
/// former fall back to rule-based composition, the latter are recovered via
/// the language fallback chain and logged as data-quality warnings.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The incoming message was empty or whitespace. Rejected before crisis
    /// detection, scoring or any context access.
    #[error("message text is required")]
    EmptyMessage,

    /// The context store could not load or persist the user's record. Not
    /// swallowed: losing a context update silently would corrupt the rolling
    /// window and the trend. The crisis path never touches the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}
