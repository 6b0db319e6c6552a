//! Free-entry writing questions: no options, the user draws the character.
//!
//! Both kinds target the first kanji of the word. For compounds the prompt
//! names the target's ordinal position, since only the meaning of the whole
//! word is shown. Multi-attempt scoring for stroke order is the consumer's
//! job; the engine only selects the target.

use rand::Rng;

use crate::quiz_engine::error::Result;
use crate::quiz_engine::helpers::{position_name, target_kanji};
use crate::quiz_engine::models::{Correctness, Payload, Question, QuestionKind, VocabEntry};
use crate::quiz_engine::questions::Material;
use crate::quiz_engine::similarity::kanji_count;

fn writing_question(
    entry: &VocabEntry,
    kind: QuestionKind,
    prompt: String,
    prompt_en: String,
    target: char,
) -> Question {
    Question {
        kind,
        prompt,
        prompt_en,
        options: Vec::new(),
        correct: Correctness::Target(target.to_string()),
        correct_answer: target.to_string(),
        hint: Some(format!("{} ({})", entry.kanji, entry.reading)),
        entry: entry.clone(),
        payload: Payload::None,
    }
}

/// Write the kanji for this meaning.
pub fn draw_kanji<R: Rng>(
    _rng: &mut R,
    entry: &VocabEntry,
    _material: &Material<'_>,
) -> Result<Question> {
    let meaning = entry.primary_meaning()?.to_string();
    let target = target_kanji(&entry.kanji);

    let (prompt, prompt_en) = if kanji_count(&entry.kanji) == 1 {
        (
            format!("Zapisz kanji oznaczające: „{meaning}\""),
            format!("Write the kanji meaning: \"{meaning}\""),
        )
    } else {
        let (pos_pl, pos_en) = position_name(&entry.kanji, target);
        (
            format!("Zapisz {pos_pl} kanji ze słowa „{meaning}\""),
            format!("Write the {pos_en} kanji from \"{meaning}\""),
        )
    };

    Ok(writing_question(entry, QuestionKind::DrawKanji, prompt, prompt_en, target))
}

/// Write the kanji with correct stroke order. Same target selection as
/// [`draw_kanji`], distinct wording.
pub fn stroke_order<R: Rng>(
    _rng: &mut R,
    entry: &VocabEntry,
    _material: &Material<'_>,
) -> Result<Question> {
    let meaning = entry.primary_meaning()?.to_string();
    let target = target_kanji(&entry.kanji);

    let (prompt, prompt_en) = if kanji_count(&entry.kanji) == 1 {
        (
            format!("Zapisz kanji „{meaning}\" w poprawnej kolejności kresek"),
            format!("Write \"{meaning}\" with correct stroke order"),
        )
    } else {
        let (pos_pl, pos_en) = position_name(&entry.kanji, target);
        (
            format!("Zapisz {pos_pl} kanji ze słowa „{meaning}\" (poprawna kolejność kresek)"),
            format!("Write the {pos_en} kanji from \"{meaning}\" (correct stroke order)"),
        )
    };

    Ok(writing_question(entry, QuestionKind::StrokeOrder, prompt, prompt_en, target))
}
