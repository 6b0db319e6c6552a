//! Reading-answer questions: single choice and multi-select.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::distractors::reading_distractors;
use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::{shuffle_with_index, split_readings, target_kanji};
use crate::quiz_engine::models::{Correctness, Payload, Question, QuestionKind, VocabEntry};
use crate::quiz_engine::questions::Material;

/// Show the kanji, pick the correct reading.
pub fn reading<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let correct = entry.reading.clone();
    let fakes = reading_distractors(rng, entry, material.entries, 3);

    let mut options = vec![correct.clone()];
    options.extend(fakes);
    let (options, index) = shuffle_with_index(rng, options, &correct);

    Ok(Question {
        kind: QuestionKind::Reading,
        prompt: format!("Jakie jest czytanie dla: 【{}】?", entry.kanji),
        prompt_en: format!("What is the reading of: 【{}】?", entry.kanji),
        options,
        correct: Correctness::Index(index),
        correct_answer: correct,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}

/// Select every reading attested for the entry's primary kanji character.
///
/// The correct set is collected from all study entries containing that
/// character, each reading string split into its atomic readings.
/// Distractors come from entries that do not contain the character.
pub fn all_readings<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let target = target_kanji(&entry.kanji);

    let mut correct: Vec<String> = Vec::new();
    for e in material.entries.iter().filter(|e| e.kanji.contains(target)) {
        for r in split_readings(&e.reading) {
            if !correct.contains(&r) {
                correct.push(r);
            }
        }
    }
    // lone entries fall back to their own readings
    if correct.len() < 2 {
        for r in split_readings(&entry.reading) {
            if !correct.contains(&r) {
                correct.push(r);
            }
        }
    }
    correct.truncate(6);

    let num_fake = usize::max(8, correct.len() * 2);
    let mut fakes: Vec<String> = Vec::new();
    let mut others: Vec<&VocabEntry> = material
        .entries
        .iter()
        .filter(|e| !e.kanji.contains(target))
        .collect();
    others.shuffle(rng);
    'outer: for e in others {
        for r in split_readings(&e.reading) {
            if !correct.contains(&r) && !fakes.contains(&r) {
                fakes.push(r);
                if fakes.len() >= num_fake {
                    break 'outer;
                }
            }
        }
    }

    let mut options: Vec<String> = correct.clone();
    options.extend(fakes);
    options.shuffle(rng);

    let indices: Vec<usize> = correct
        .iter()
        .map(|r| {
            options
                .iter()
                .position(|o| o == r)
                .expect("every correct reading must be present in the option list")
        })
        .collect();
    let correct_answer = correct.join(", ");

    Ok(Question {
        kind: QuestionKind::AllReadings,
        prompt: format!("Zaznacz wszystkie czytania dla kanji: 【{target}】"),
        prompt_en: format!("Select all readings for kanji: 【{target}】"),
        options,
        correct: Correctness::Indices(indices),
        correct_answer,
        hint: None,
        entry: entry.clone(),
        payload: Payload::None,
    })
}
