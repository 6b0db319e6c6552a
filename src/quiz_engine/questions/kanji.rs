//! Kanji-answer questions: pick the right written form.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::distractors::kanji_distractors;
use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::{shuffle_with_index, shuffled_decoy};
use crate::quiz_engine::models::{Correctness, Payload, Question, QuestionKind, VocabEntry};
use crate::quiz_engine::questions::Material;
use crate::quiz_engine::similarity::kanji_count;

fn push_unique(fakes: &mut Vec<String>, candidate: &str, correct: &str) {
    if candidate != correct && !fakes.iter().any(|f| f == candidate) {
        fakes.push(candidate.to_string());
    }
}

/// Show the meaning, pick the correct kanji.
///
/// The strongest decoy is the word's own characters in a different order;
/// same-length study words and pool words fill the remaining slots.
pub fn polish_to_kanji<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let meaning = entry.primary_meaning()?.to_string();
    let correct = entry.kanji.clone();
    let correct_len = correct.chars().count();

    let mut fakes: Vec<String> = Vec::new();

    if let Some(decoy) = shuffled_decoy(rng, &correct) {
        fakes.push(decoy);
    }

    let mut same_len: Vec<&str> = material
        .entries
        .iter()
        .filter(|e| e.kanji != correct && e.kanji.chars().count() == correct_len)
        .map(|e| e.kanji.as_str())
        .collect();
    same_len.shuffle(rng);
    for word in same_len {
        if fakes.len() >= 3 {
            break;
        }
        push_unique(&mut fakes, word, &correct);
    }

    if fakes.len() < 3 {
        for c in material.index.similar_to(&correct, 3, rng) {
            if fakes.len() >= 3 {
                break;
            }
            if correct_len == 1 {
                push_unique(&mut fakes, &c.to_string(), &correct);
            }
        }
        let mut pool_same: Vec<&str> = material
            .pool
            .words()
            .iter()
            .filter(|w| w.word.chars().count() == correct_len)
            .map(|w| w.word.as_str())
            .collect();
        pool_same.shuffle(rng);
        for word in pool_same {
            if fakes.len() >= 3 {
                break;
            }
            push_unique(&mut fakes, word, &correct);
        }
    }

    if fakes.len() < 3 {
        let needed = 3 - fakes.len();
        for word in kanji_distractors(
            rng,
            &correct,
            material.entries,
            material.pool,
            material.index,
            needed,
        ) {
            push_unique(&mut fakes, &word, &correct);
        }
    }

    fakes.truncate(3);
    let mut options = vec![correct.clone()];
    options.extend(fakes);
    let (options, index) = shuffle_with_index(rng, options, &correct);

    Ok(Question {
        kind: QuestionKind::PolishToKanji,
        prompt: format!("Przetłumacz na japoński: „{meaning}\""),
        prompt_en: format!("Translate to Japanese: \"{meaning}\""),
        options,
        correct: Correctness::Index(index),
        correct_answer: correct,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}

/// Show the reading, pick which kanji has it.
///
/// Visually similar characters first, then study words within one kanji of
/// the correct count, then the pool nearest-count first.
pub fn reading_to_kanji<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let correct = entry.kanji.clone();
    let correct_kanji = kanji_count(&correct);

    let mut fakes: Vec<String> = Vec::new();
    for c in material.index.similar_to(&correct, 2, rng) {
        push_unique(&mut fakes, &c.to_string(), &correct);
    }

    let mut close: Vec<&str> = material
        .entries
        .iter()
        .filter(|e| e.kanji != correct && kanji_count(&e.kanji).abs_diff(correct_kanji) <= 1)
        .map(|e| e.kanji.as_str())
        .collect();
    close.shuffle(rng);
    for word in close {
        if fakes.len() >= 3 {
            break;
        }
        push_unique(&mut fakes, word, &correct);
    }

    if fakes.len() < 3 {
        let mut rest: Vec<&str> = material
            .entries
            .iter()
            .filter(|e| e.kanji != correct)
            .map(|e| e.kanji.as_str())
            .collect();
        rest.shuffle(rng);
        for word in rest {
            if fakes.len() >= 3 {
                break;
            }
            push_unique(&mut fakes, word, &correct);
        }
    }

    if fakes.len() < 3 {
        let mut ranked: Vec<(usize, u32, &str)> = material
            .pool
            .words()
            .iter()
            .map(|w| {
                let dist = kanji_count(&w.word).abs_diff(correct_kanji);
                (dist, rng.gen::<u32>(), w.word.as_str())
            })
            .collect();
        ranked.sort();
        for (_, _, word) in ranked {
            if fakes.len() >= 3 {
                break;
            }
            push_unique(&mut fakes, word, &correct);
        }
    }

    fakes.truncate(3);
    let mut options = vec![correct.clone()];
    options.extend(fakes);
    let (options, index) = shuffle_with_index(rng, options, &correct);

    Ok(Question {
        kind: QuestionKind::ReadingToKanji,
        prompt: format!("Które kanji ma czytanie: 「{}」?", entry.reading),
        prompt_en: format!("Which kanji has the reading: 「{}」?", entry.reading),
        options,
        correct: Correctness::Index(index),
        correct_answer: correct,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}
