//! Error types for flipdeck-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// States in which a session has nothing to show or act on.
///
/// None of these are faults: the engine is left unchanged and the caller is
/// expected to render a "nothing to study" message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("deck is empty")]
    EmptyDeck,

    #[error("no items match the active tags")]
    EmptyFilterResult,

    #[error("no current card")]
    NoCurrentCard,

    #[error("index {index} out of range (len {len})")]
    InvalidIndex { index: usize, len: usize },
}
