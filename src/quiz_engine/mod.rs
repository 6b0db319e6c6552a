//! Core quiz engine — distractor selection, question assembly, and sampling.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: entries, pool, question records, config |
//! | `error`       | Precondition failures (`thiserror`) |
//! | `similarity`  | Script ranges, reading-shape scoring, static radical groups |
//! | `distractors` | The three distractor chains: meanings, kanji, readings |
//! | `helpers`     | Shared builder functions (shuffling, splitting, decoys) |
//! | `questions`   | Twelve question builders grouped by answer modality |
//! | `assembler`   | Single entry point `generate_quiz()` — samples and dispatches |

pub mod assembler;
pub mod distractors;
pub mod error;
pub(crate) mod helpers;
pub mod models;
pub mod questions;
pub mod similarity;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_quiz` without reaching into sub-modules.
pub use assembler::generate_quiz;
pub use error::{QuizError, Result};
pub use models::{
    BombPair, Correctness, Payload, PoolWord, Question, QuestionKind, QuizConfig,
    RunnerCheckpoint, VocabEntry, WordPool,
};
pub use similarity::SimilarityIndex;
