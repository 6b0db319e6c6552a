//! Scramble questions: rebuild the word (or its reading) from a tile set.
//!
//! The option list holds the tiles: the correct characters plus a larger
//! helping of distractor characters, pre-shuffled. Correctness is the
//! literal target string, compared against the user's arrangement.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::clean_reading;
use crate::quiz_engine::models::{Correctness, Payload, Question, QuestionKind, VocabEntry};
use crate::quiz_engine::questions::Material;
use crate::quiz_engine::similarity::{is_hiragana, is_katakana, is_kanji};

const HIRAGANA_POOL: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをんがぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽ";
const KATAKANA_POOL: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲンガギグゲゴザジズゼゾダヂヅデドバビブベボパピプペポ";

fn tiles_of(correct: &[char], distractors: Vec<char>, rng: &mut impl Rng) -> Vec<String> {
    let mut tiles: Vec<String> = correct
        .iter()
        .chain(distractors.iter())
        .map(|c| c.to_string())
        .collect();
    tiles.shuffle(rng);
    tiles
}

/// Arrange character tiles to form the kanji word for a given meaning.
pub fn scramble<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let meaning = entry.primary_meaning()?.to_string();
    let word = entry.kanji.clone();
    let chars: Vec<char> = word.chars().collect();
    let quota = usize::max(8, chars.len() * 3);

    let mut distractors: Vec<char> = Vec::new();
    for c in material.index.similar_to(&word, quota, rng) {
        if !chars.contains(&c) && !distractors.contains(&c) {
            distractors.push(c);
        }
    }

    let mut others: Vec<&VocabEntry> = material
        .entries
        .iter()
        .filter(|e| e.kanji != word)
        .collect();
    others.shuffle(rng);
    'outer: for e in others {
        for c in e.kanji.chars() {
            if is_kanji(c) && !chars.contains(&c) && !distractors.contains(&c) {
                distractors.push(c);
                if distractors.len() >= quota {
                    break 'outer;
                }
            }
        }
    }

    if distractors.len() < quota {
        let mut singles: Vec<char> = material
            .pool
            .words()
            .iter()
            .filter_map(|w| {
                let mut it = w.word.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            })
            .collect();
        singles.shuffle(rng);
        for c in singles {
            if !chars.contains(&c) && !distractors.contains(&c) {
                distractors.push(c);
                if distractors.len() >= quota {
                    break;
                }
            }
        }
    }

    distractors.truncate(quota);
    let options = tiles_of(&chars, distractors, rng);

    Ok(Question {
        kind: QuestionKind::Scramble,
        prompt: format!("Ułóż słowo oznaczające: „{meaning}\""),
        prompt_en: format!("Arrange characters to form: \"{meaning}\""),
        options,
        correct: Correctness::Target(word.clone()),
        correct_answer: word,
        hint: Some(entry.reading.clone()),
        entry: entry.clone(),
        payload: Payload::None,
    })
}

/// Arrange kana tiles to form the reading of a kanji compound.
///
/// Distractor kana match the majority script of the cleaned reading, so a
/// katakana word does not get hiragana filler.
pub fn reading_scramble<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    let meaning = entry.primary_meaning()?.to_string();
    let clean = clean_reading(&entry.reading);
    let chars: Vec<char> = clean.chars().collect();
    let quota = usize::max(8, chars.len() * 2);

    let katakana = chars.iter().filter(|&&c| is_katakana(c)).count();
    let hiragana = chars.iter().filter(|&&c| is_hiragana(c)).count();
    let kana_pool: Vec<char> = if katakana > hiragana {
        KATAKANA_POOL.chars().collect()
    } else {
        HIRAGANA_POOL.chars().collect()
    };

    let mut distractors: Vec<char> = Vec::new();
    let mut others: Vec<&VocabEntry> = material
        .entries
        .iter()
        .filter(|e| e.reading != entry.reading)
        .collect();
    others.shuffle(rng);
    'outer: for e in others {
        for c in clean_reading(&e.reading).chars() {
            if !chars.contains(&c) && !distractors.contains(&c) && kana_pool.contains(&c) {
                distractors.push(c);
                if distractors.len() >= quota {
                    break 'outer;
                }
            }
        }
    }

    if distractors.len() < quota {
        let mut fill = kana_pool.clone();
        fill.shuffle(rng);
        for c in fill {
            if !chars.contains(&c) && !distractors.contains(&c) {
                distractors.push(c);
                if distractors.len() >= quota {
                    break;
                }
            }
        }
    }

    distractors.truncate(quota);
    let options = tiles_of(&chars, distractors, rng);

    Ok(Question {
        kind: QuestionKind::ReadingScramble,
        prompt: format!("Ułóż czytanie dla: 【{}】", entry.kanji),
        prompt_en: format!("Arrange kana to form the reading of: 【{}】", entry.kanji),
        options,
        correct: Correctness::Target(clean.clone()),
        correct_answer: clean,
        hint: Some(meaning),
        entry: entry.clone(),
        payload: Payload::None,
    })
}
