//! Timed mini-games: bomb defuse (pair matching) and runner (checkpoint
//! gauntlet).
//!
//! The time budgets are linear in the number of pairs/checkpoints. They
//! describe the game's external countdown only; the engine has no timer.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::distractors::kanji_distractors;
use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::shuffle_with_index;
use crate::quiz_engine::models::{
    BombPair, Correctness, Payload, Question, QuestionKind, RunnerCheckpoint, VocabEntry,
};
use crate::quiz_engine::questions::Material;

const BOMB_SECONDS_PER_PAIR: u32 = 2;
const BOMB_BONUS_SECONDS: u32 = 4;
const RUNNER_SECONDS_PER_CHECKPOINT: u32 = 3;
const RUNNER_BONUS_SECONDS: u32 = 5;

/// Match kanji + meaning cards with their readings before the bomb goes off.
///
/// Selects 2..=5 pairs (fewer on tiny vocabularies), always including the
/// triggering entry, and skips entries whose reading is already taken so no
/// reading appears twice. The reading list is shuffled independently of the
/// pair list.
pub fn bomb_defuse<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let max_pairs = material.entries.len().min(5).max(1);
    let want = if max_pairs < 2 { max_pairs } else { rng.gen_range(2..=max_pairs) };

    let mut selected: Vec<&VocabEntry> = vec![entry];
    let mut others: Vec<&VocabEntry> = material
        .entries
        .iter()
        .filter(|e| e.kanji != entry.kanji)
        .collect();
    others.shuffle(rng);
    for e in others {
        if selected.len() >= want {
            break;
        }
        if !selected.iter().any(|s| s.reading == e.reading) {
            selected.push(e);
        }
    }

    let pair_count = selected.len();
    let time_limit = pair_count as u32 * BOMB_SECONDS_PER_PAIR + BOMB_BONUS_SECONDS;

    let mut readings: Vec<String> = selected.iter().map(|e| e.reading.clone()).collect();
    readings.shuffle(rng);

    let pairs: Vec<BombPair> = selected
        .iter()
        .map(|e| BombPair {
            kanji: e.kanji.clone(),
            meaning: e.meanings.first().cloned().unwrap_or_default(),
            reading: e.reading.clone(),
            reading_idx: readings
                .iter()
                .position(|r| r == &e.reading)
                .expect("selected readings are pairwise distinct"),
        })
        .collect();

    Ok(Question {
        kind: QuestionKind::BombDefuse,
        prompt: format!("Rozbrój bombę! Połącz {pair_count} par w {time_limit} sekund!"),
        prompt_en: format!("Defuse the bomb! Match {pair_count} pairs in {time_limit} seconds!"),
        options: Vec::new(),
        correct: Correctness::Target(entry.kanji.clone()),
        correct_answer: entry.kanji.clone(),
        hint: None,
        entry: entry.clone(),
        payload: Payload::Bomb { pairs, readings, time_limit },
    })
}

/// Clear 3..=5 translation checkpoints before being caught.
///
/// Each checkpoint shows a meaning and three written forms: the correct one
/// plus two kanji distractors, one of which becomes the reversed word when
/// the word has more than one character and the reversal differs.
pub fn runner_game<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let want = rng.gen_range(3..=5usize);

    let mut selected: Vec<&VocabEntry> = vec![entry];
    let mut others: Vec<&VocabEntry> = material
        .entries
        .iter()
        .filter(|e| e.kanji != entry.kanji)
        .collect();
    others.shuffle(rng);
    for &e in &others {
        if selected.len() >= want {
            break;
        }
        if !selected.iter().any(|s| s.kanji == e.kanji) {
            selected.push(e);
        }
    }
    // tiny vocabularies pad with repeats
    while selected.len() < want {
        match others.choose(rng).copied() {
            Some(e) => selected.push(e),
            None => break,
        }
    }
    selected.shuffle(rng);

    let mut checkpoints: Vec<RunnerCheckpoint> = Vec::with_capacity(selected.len());
    for e in &selected {
        let meaning = e
            .meanings
            .first()
            .cloned()
            .unwrap_or_else(|| "słowo".to_string());
        let correct = e.kanji.clone();

        let mut fakes = kanji_distractors(
            rng,
            &correct,
            material.entries,
            material.pool,
            material.index,
            2,
        );
        if correct.chars().count() > 1 {
            let reversed: String = correct.chars().rev().collect();
            if reversed != correct && !fakes.contains(&reversed) {
                if fakes.is_empty() {
                    fakes.push(reversed);
                } else {
                    fakes[0] = reversed;
                }
            }
        }

        let mut options = vec![correct.clone()];
        options.extend(fakes);
        let (options, correct_idx) = shuffle_with_index(rng, options, &correct);
        checkpoints.push(RunnerCheckpoint {
            meaning,
            options,
            correct: correct_idx,
            correct_kanji: correct,
        });
    }

    let checkpoint_count = checkpoints.len();
    let time_limit = checkpoint_count as u32 * RUNNER_SECONDS_PER_CHECKPOINT + RUNNER_BONUS_SECONDS;

    Ok(Question {
        kind: QuestionKind::RunnerGame,
        prompt: format!(
            "Uciekaj! Wybierz {checkpoint_count}x poprawne tłumaczenie w {time_limit} sekund!"
        ),
        prompt_en: format!(
            "Run away! Choose {checkpoint_count}x correct translation in {time_limit} seconds!"
        ),
        options: Vec::new(),
        correct: Correctness::Target(entry.kanji.clone()),
        correct_answer: entry.kanji.clone(),
        hint: None,
        entry: entry.clone(),
        payload: Payload::Runner { checkpoints, time_limit },
    })
}
