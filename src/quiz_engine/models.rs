use std::fmt;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::{QuizError, Result};

// ---------------------------------------------------------------------------
// Study material
// ---------------------------------------------------------------------------

/// One vocabulary entry from the user's study list.
///
/// `reading` may hold several comma-separated alternatives (`いく、ゆく`).
/// `meanings` is ordered; the first element is the primary meaning shown in
/// questions. `source` is a provenance tag only and never affects generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub reading: String,
    pub kanji: String,
    pub meanings: Vec<String>,
    pub source: String,
}

impl VocabEntry {
    pub fn new<R, K, M, S>(reading: R, kanji: K, meanings: M) -> Self
    where
        R: Into<String>,
        K: Into<String>,
        M: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VocabEntry {
            reading: reading.into(),
            kanji: kanji.into(),
            meanings: meanings.into_iter().map(Into::into).collect(),
            source: String::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// The meaning shown in question prompts.
    ///
    /// Meaning-based builders call this and propagate the error; entries with
    /// no meanings are the caller's responsibility to filter out.
    pub fn primary_meaning(&self) -> Result<&str> {
        self.meanings
            .first()
            .map(String::as_str)
            .ok_or_else(|| QuizError::MissingMeaning { kanji: self.kanji.clone() })
    }
}

/// A (word, meaning) pair from the auxiliary pool. Filler material only:
/// never carries multiple meanings or provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolWord {
    pub word: String,
    pub meaning: String,
}

impl PoolWord {
    pub fn new(word: impl Into<String>, meaning: impl Into<String>) -> Self {
        PoolWord { word: word.into(), meaning: meaning.into() }
    }
}

/// The auxiliary word pool, injected pre-fetched and already validated.
///
/// The engine treats it as read-only; how it was populated (network, cache
/// file) is outside the engine's responsibility.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordPool {
    words: Vec<PoolWord>,
}

impl WordPool {
    pub fn new(words: Vec<PoolWord>) -> Self {
        WordPool { words }
    }

    pub fn empty() -> Self {
        WordPool::default()
    }

    /// The minimal offline pool used when no fetched material is available.
    pub fn fallback() -> Self {
        const FALLBACK: [(&str, &str); 16] = [
            ("食べる", "jeść"),
            ("飲む", "pić"),
            ("行く", "iść"),
            ("来る", "przyjść"),
            ("見る", "widzieć"),
            ("聞く", "słyszeć"),
            ("話す", "mówić"),
            ("読む", "czytać"),
            ("書く", "pisać"),
            ("買う", "kupować"),
            ("待つ", "czekać"),
            ("知る", "wiedzieć"),
            ("思う", "myśleć"),
            ("作る", "tworzyć"),
            ("持つ", "trzymać"),
            ("出る", "wychodzić"),
        ];
        WordPool::new(FALLBACK.iter().map(|&(w, m)| PoolWord::new(w, m)).collect())
    }

    pub fn words(&self) -> &[PoolWord] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Question kinds
// ---------------------------------------------------------------------------

/// The twelve question types the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionKind {
    KanjiToPolish,
    PolishToKanji,
    Reading,
    ReadingToKanji,
    KanjiCompound,
    Scramble,
    ReadingScramble,
    AllReadings,
    DrawKanji,
    StrokeOrder,
    BombDefuse,
    RunnerGame,
}

impl QuestionKind {
    /// All twelve kinds in canonical order.
    pub fn all() -> [QuestionKind; 12] {
        [
            QuestionKind::KanjiToPolish,
            QuestionKind::PolishToKanji,
            QuestionKind::Reading,
            QuestionKind::ReadingToKanji,
            QuestionKind::KanjiCompound,
            QuestionKind::Scramble,
            QuestionKind::ReadingScramble,
            QuestionKind::AllReadings,
            QuestionKind::DrawKanji,
            QuestionKind::StrokeOrder,
            QuestionKind::BombDefuse,
            QuestionKind::RunnerGame,
        ]
    }

    /// Snake_case tag used by the web player.
    pub fn tag(self) -> &'static str {
        match self {
            QuestionKind::KanjiToPolish   => "kanji_to_polish",
            QuestionKind::PolishToKanji   => "polish_to_kanji",
            QuestionKind::Reading         => "reading",
            QuestionKind::ReadingToKanji  => "reading_to_kanji",
            QuestionKind::KanjiCompound   => "kanji_compound",
            QuestionKind::Scramble        => "scramble",
            QuestionKind::ReadingScramble => "reading_scramble",
            QuestionKind::AllReadings     => "all_readings",
            QuestionKind::DrawKanji       => "draw_kanji",
            QuestionKind::StrokeOrder     => "stroke_order",
            QuestionKind::BombDefuse      => "bomb_defuse",
            QuestionKind::RunnerGame      => "runner_game",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Question records
// ---------------------------------------------------------------------------

/// How the correct answer is identified for a question.
///
/// The index forms are always resolved *after* the option list has been
/// shuffled, so they point at the literal correct value wherever it landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Correctness {
    /// Single correct option (classic multiple choice).
    Index(usize),
    /// Several correct options (multi-select).
    Indices(Vec<usize>),
    /// A literal target string the user must produce or arrange.
    Target(String),
}

/// One kanji + meaning card inside a bomb-defuse round.
///
/// `reading_idx` points into the independently shuffled reading list, so the
/// pairing is non-trivial for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombPair {
    pub kanji: String,
    pub meaning: String,
    pub reading: String,
    pub reading_idx: usize,
}

/// One obstacle inside a runner round: pick the right translation to pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerCheckpoint {
    pub meaning: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub correct_kanji: String,
}

/// Extra data carried only by the timed mini-game kinds.
///
/// The time limits describe the game's external countdown; the engine itself
/// has no timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payload {
    None,
    Bomb {
        pairs: Vec<BombPair>,
        readings: Vec<String>,
        time_limit: u32,
    },
    Runner {
        checkpoints: Vec<RunnerCheckpoint>,
        time_limit: u32,
    },
}

/// The engine's sole output unit: one fully assembled question.
///
/// Created once by a builder, immutable afterwards, consumed by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: QuestionKind,
    /// Localized prompt (Polish).
    pub prompt: String,
    /// Reference prompt (English).
    pub prompt_en: String,
    /// Candidate answers, or tiles for the scramble kinds.
    /// Empty for free-entry and mini-game kinds.
    pub options: Vec<String>,
    pub correct: Correctness,
    /// Denormalized correct answer for display and answer keys.
    pub correct_answer: String,
    pub hint: Option<String>,
    /// Back-reference to the source entry.
    pub entry: VocabEntry,
    pub payload: Payload,
}

// ---------------------------------------------------------------------------
// Assembler configuration
// ---------------------------------------------------------------------------

/// Configuration accepted by [`generate_quiz`](crate::generate_quiz).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Number of questions to produce; capped at the vocabulary size.
    pub question_count: usize,
    /// Question kinds to draw from. Empty means all twelve.
    pub allowed_kinds: Vec<QuestionKind>,
    /// Seed for the shared randomness source. `None` uses entropy.
    pub rng_seed: Option<u64>,
}

impl QuizConfig {
    /// All twelve kinds, entropy seed.
    pub fn new(question_count: usize) -> Self {
        QuizConfig {
            question_count,
            allowed_kinds: QuestionKind::all().to_vec(),
            rng_seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = QuestionKind>) -> Self {
        self.allowed_kinds = kinds.into_iter().collect();
        self
    }
}
