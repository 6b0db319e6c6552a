//! Meaning-answer questions: show a kanji word, pick the right translation.

use rand::Rng;

use crate::quiz_engine::distractors::meaning_distractors;
use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::shuffle_with_index;
use crate::quiz_engine::models::{Correctness, Payload, Question, QuestionKind, VocabEntry};
use crate::quiz_engine::questions::Material;

/// Show the kanji compound, pick the correct meaning.
pub fn kanji_to_polish<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let correct = entry.primary_meaning()?.to_string();
    let fakes = meaning_distractors(rng, entry, material.entries, material.pool, 3);

    let mut options = vec![correct.clone()];
    options.extend(fakes);
    let (options, index) = shuffle_with_index(rng, options, &correct);

    Ok(Question {
        kind: QuestionKind::KanjiToPolish,
        prompt: format!("Co oznacza: 【{}】?", entry.kanji),
        prompt_en: format!("What does 【{}】 mean?", entry.kanji),
        options,
        correct: Correctness::Index(index),
        correct_answer: correct,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}

/// Same as [`kanji_to_polish`] but the prompt includes the reading as a hint.
pub fn kanji_compound<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let correct = entry.primary_meaning()?.to_string();
    let fakes = meaning_distractors(rng, entry, material.entries, material.pool, 3);

    let mut options = vec![correct.clone()];
    options.extend(fakes);
    let (options, index) = shuffle_with_index(rng, options, &correct);

    Ok(Question {
        kind: QuestionKind::KanjiCompound,
        prompt: format!("Co oznacza 【{}】 ({})?", entry.kanji, entry.reading),
        prompt_en: format!("What does 【{}】 ({}) mean?", entry.kanji, entry.reading),
        options,
        correct: Correctness::Index(index),
        correct_answer: correct,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}
