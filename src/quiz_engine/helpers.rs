//! Shared builder functions that eliminate boilerplate across question
//! builders.
//!
//! Every builder assembles the same pieces: pick distractors, shuffle the
//! option list, locate the correct answer afterwards, and construct the
//! final record. These helpers centralise that work so builder files focus
//! on question logic only.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::similarity::is_kanji;

/// Shuffle `options` and return them together with the post-shuffle position
/// of `correct`. The index is always resolved after shuffling, never fixed
/// up front.
pub(crate) fn shuffle_with_index<R: Rng>(
    rng: &mut R,
    mut options: Vec<String>,
    correct: &str,
) -> (Vec<String>, usize) {
    options.shuffle(rng);
    let index = options
        .iter()
        .position(|o| o == correct)
        .expect("correct answer must be present in the option list");
    (options, index)
}

/// Split a reading string into its atomic readings (`いく、ゆく` → 2 items).
pub(crate) fn split_readings(reading: &str) -> Vec<String> {
    reading
        .replace('、', ",")
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strip separator marks and spaces from a reading, leaving only kana.
pub(crate) fn clean_reading(reading: &str) -> String {
    reading
        .chars()
        .filter(|c| !matches!(c, '・' | ' ' | '、' | ','))
        .collect()
}

/// The character a writing question targets: the first kanji of the word,
/// or its first character if it has no kanji at all.
pub(crate) fn target_kanji(word: &str) -> char {
    word.chars()
        .find(|&c| is_kanji(c))
        .or_else(|| word.chars().next())
        .unwrap_or('?')
}

/// Ordinal name (Polish, English) of `target` among the kanji of `word`.
pub(crate) fn position_name(word: &str, target: char) -> (String, String) {
    const POLISH: [&str; 5] = ["pierwsze", "drugie", "trzecie", "czwarte", "piąte"];
    const ENGLISH: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

    let position = word
        .chars()
        .filter(|&c| is_kanji(c))
        .position(|c| c == target);

    match position {
        Some(p) if p < POLISH.len() => (POLISH[p].to_string(), ENGLISH[p].to_string()),
        Some(p) => (format!("{}.", p + 1), format!("{}.", p + 1)),
        None => (POLISH[0].to_string(), ENGLISH[0].to_string()),
    }
}

/// A decoy made by shuffling the characters of `word`, if a different order
/// can be found within five attempts.
pub(crate) fn shuffled_decoy<R: Rng>(rng: &mut R, word: &str) -> Option<String> {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return None;
    }
    for _ in 0..5 {
        chars.shuffle(rng);
        let candidate: String = chars.iter().collect();
        if candidate != word {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn split_handles_both_comma_styles() {
        assert_eq!(split_readings("いく、ゆく"), vec!["いく", "ゆく"]);
        assert_eq!(split_readings("かう"), vec!["かう"]);
        assert_eq!(split_readings("a, b"), vec!["a", "b"]);
    }

    #[test]
    fn clean_reading_strips_separators() {
        assert_eq!(clean_reading("いく・ゆく"), "いくゆく");
        assert_eq!(clean_reading("か う、"), "かう");
    }

    #[test]
    fn target_kanji_prefers_first_ideograph() {
        assert_eq!(target_kanji("お茶"), '茶');
        assert_eq!(target_kanji("読書"), '読');
        assert_eq!(target_kanji("たべる"), 'た');
    }

    #[test]
    fn position_names_are_ordinal() {
        assert_eq!(position_name("読書", '読').1, "first");
        assert_eq!(position_name("読書", '書').1, "second");
    }

    #[test]
    fn shuffle_reports_post_shuffle_index() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let options = vec!["a".into(), "b".into(), "c".into(), "d".into()];
            let (shuffled, idx) = shuffle_with_index(&mut rng, options, "c");
            assert_eq!(shuffled[idx], "c");
        }
    }

    #[test]
    fn decoy_differs_from_word() {
        let mut rng = StdRng::seed_from_u64(3);
        let decoy = shuffled_decoy(&mut rng, "読書会").expect("three distinct chars shuffle");
        assert_ne!(decoy, "読書会");
        assert_eq!(shuffled_decoy(&mut rng, "本"), None);
    }
}
