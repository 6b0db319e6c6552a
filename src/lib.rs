//! # kanji_drill_gen
//!
//! A fully offline quiz generator for personal kanji vocabulary lists.
//!
//! This library turns a study list (kanji, reading, meanings) into randomized
//! multiple-choice and mini-game questions across twelve question kinds, from
//! classic "what does 【買う】 mean?" up to timed pair-matching. Wrong answers
//! are not random noise: similarity heuristics pick distractors that share a
//! visual component, a character count, or a reading shape with the correct
//! answer, so every question stays plausible.
//!
//! ## How it works
//!
//! 1. Parse or build a `Vec<`[`VocabEntry`]`>` and (optionally) a [`WordPool`]
//!    of auxiliary (word, meaning) pairs for filler material.
//! 2. Call [`generate_quiz`] with a [`QuizConfig`] — the engine samples
//!    entries without replacement, assigns each a kind from the allowed set,
//!    picks distractors through per-kind fallback chains, and shuffles the
//!    options.
//! 3. The returned [`Question`] records carry prompt text, options, the
//!    post-shuffle correct index (or index set, or literal target string),
//!    and any mini-game payload — ready for any renderer. The
//!    [`web_adapter`] module produces the JSON shape the bundled web player
//!    consumes.
//!
//! ## Key features
//!
//! - **Deterministic**: set `rng_seed: Some(u64)` to reproduce the exact same
//!   quiz every time — useful for tests.
//! - **Graceful degradation**: when a tiny vocabulary and an empty pool
//!   cannot fill a 4-option question, you get fewer options, never an error.
//! - **Injected material**: the auxiliary pool is a plain value passed in;
//!   nothing global, nothing fetched.
//!
//! ## Quick start
//!
//! ```rust
//! use kanji_drill_gen::{generate_quiz, QuestionKind, QuizConfig, VocabEntry, WordPool};
//!
//! let entries = vec![
//!     VocabEntry::new("かう", "買う", ["kupować"]),
//!     VocabEntry::new("うる", "売る", ["sprzedawać"]),
//!     VocabEntry::new("よむ", "読む", ["czytać"]),
//! ];
//!
//! // Minimal — all twelve kinds, entropy seed:
//! let quiz = generate_quiz(&entries, &WordPool::fallback(), &QuizConfig::new(2)).unwrap();
//! assert_eq!(quiz.len(), 2);
//!
//! // Full control — fixed seed, restricted kind set:
//! let config = QuizConfig::new(3)
//!     .with_seed(42)
//!     .with_kinds([QuestionKind::KanjiToPolish, QuestionKind::Reading]);
//! for question in generate_quiz(&entries, &WordPool::empty(), &config).unwrap() {
//!     println!("Q: {}", question.prompt_en);
//!     for (i, option) in question.options.iter().enumerate() {
//!         println!("  {}) {option}", (b'a' + i as u8) as char);
//!     }
//! }
//! ```

pub mod quiz_engine;
pub mod web_adapter;

// Convenience re-exports so callers can use `kanji_drill_gen::generate_quiz`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_quiz, BombPair, Correctness, Payload, PoolWord, Question, QuestionKind,
    QuizConfig, QuizError, Result, RunnerCheckpoint, SimilarityIndex, VocabEntry, WordPool,
};
