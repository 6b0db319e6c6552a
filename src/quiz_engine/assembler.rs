//! Single entry point `generate_quiz()` — samples entries and dispatches to
//! the question builders.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::error::Result;
use crate::quiz_engine::models::{Question, QuestionKind, QuizConfig, VocabEntry, WordPool};
use crate::quiz_engine::questions::{self, Material};
use crate::quiz_engine::similarity::SimilarityIndex;

/// Generate a quiz: sample entries without replacement, assign each a
/// question kind drawn uniformly from the allowed set, and build the
/// question records in sampling order.
///
/// An empty vocabulary (or a zero question count) yields an empty quiz, not
/// an error. The only error is routing a zero-meaning entry to a
/// meaning-based kind.
pub fn generate_quiz(
    entries: &[VocabEntry],
    pool: &WordPool,
    config: &QuizConfig,
) -> Result<Vec<Question>> {
    let mut rng: StdRng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if entries.is_empty() || config.question_count == 0 {
        return Ok(Vec::new());
    }

    let index = SimilarityIndex::new();
    let material = Material { entries, pool, index: &index };

    let kinds: Vec<QuestionKind> = if config.allowed_kinds.is_empty() {
        QuestionKind::all().to_vec()
    } else {
        config.allowed_kinds.clone()
    };

    // sample without replacement; sampling order is the output order
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.shuffle(&mut rng);
    order.truncate(config.question_count.min(entries.len()));
    tracing::debug!(
        sampled = order.len(),
        requested = config.question_count,
        vocabulary = entries.len(),
        "assembling quiz"
    );

    let mut questions = Vec::with_capacity(order.len());
    for i in order {
        let entry = &entries[i];
        let kind = *kinds
            .choose(&mut rng)
            .expect("allowed kind set is non-empty");
        tracing::debug!(kanji = %entry.kanji, %kind, "building question");
        questions.push(build(&mut rng, kind, entry, &material)?);
    }
    Ok(questions)
}

/// Route one entry to the builder for `kind`.
pub fn build<R: Rng>(
    rng: &mut R,
    kind: QuestionKind,
    entry: &VocabEntry,
    material: &Material<'_>,
) -> Result<Question> {
    match kind {
        QuestionKind::KanjiToPolish => questions::meaning::kanji_to_polish(rng, entry, material),
        QuestionKind::KanjiCompound => questions::meaning::kanji_compound(rng, entry, material),
        QuestionKind::PolishToKanji => questions::kanji::polish_to_kanji(rng, entry, material),
        QuestionKind::ReadingToKanji => questions::kanji::reading_to_kanji(rng, entry, material),
        QuestionKind::Reading => questions::reading::reading(rng, entry, material),
        QuestionKind::AllReadings => questions::reading::all_readings(rng, entry, material),
        QuestionKind::Scramble => questions::scramble::scramble(rng, entry, material),
        QuestionKind::ReadingScramble => {
            questions::scramble::reading_scramble(rng, entry, material)
        }
        QuestionKind::DrawKanji => questions::writing::draw_kanji(rng, entry, material),
        QuestionKind::StrokeOrder => questions::writing::stroke_order(rng, entry, material),
        QuestionKind::BombDefuse => questions::games::bomb_defuse(rng, entry, material),
        QuestionKind::RunnerGame => questions::games::runner_game(rng, entry, material),
    }
}
