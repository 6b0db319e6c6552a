//! Error types for the quiz engine.
//!
//! Only true precondition failures surface as errors. Running short of
//! distractor material is never an error: every chain degrades to fewer
//! options instead. An empty vocabulary yields an empty quiz.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An entry with zero meanings was routed to a meaning-based question
    /// kind. Filtering such entries is the caller's responsibility.
    #[error("entry 「{kanji}」 has no meanings but was routed to a meaning-based question")]
    MissingMeaning { kanji: String },
}
