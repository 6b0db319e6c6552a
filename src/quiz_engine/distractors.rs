//! The three distractor strategies: meanings, kanji, readings.
//!
//! Each is a pure function of (correct entry, study list, auxiliary pool,
//! count) and applies an ordered chain of sources, stopping once the quota
//! is filled. Running short is allowed — builders degrade to fewer options
//! rather than fail.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::models::{VocabEntry, WordPool};
use crate::quiz_engine::similarity::{kanji_count, reading_score, ReadingShape, SimilarityIndex};

// ---------------------------------------------------------------------------
// Quota
// ---------------------------------------------------------------------------

/// Accumulates candidates up to a fixed quota, rejecting duplicates and
/// banned values. Shared by all three chains.
struct Quota {
    items: Vec<String>,
    want: usize,
    banned: Vec<String>,
    fold_case: bool,
}

impl Quota {
    fn new(want: usize, banned: Vec<String>, fold_case: bool) -> Self {
        let banned = if fold_case {
            banned.into_iter().map(|b| b.to_lowercase()).collect()
        } else {
            banned
        };
        Quota { items: Vec::with_capacity(want), want, banned, fold_case }
    }

    fn full(&self) -> bool {
        self.items.len() >= self.want
    }

    fn offer(&mut self, candidate: &str) -> bool {
        if self.full() {
            return false;
        }
        let fold = self.fold_case;
        let key = |s: &str| if fold { s.to_lowercase() } else { s.to_string() };
        let candidate_key = key(candidate);
        if self.banned.iter().any(|b| key(b) == candidate_key)
            || self.items.iter().any(|i| key(i) == candidate_key)
        {
            return false;
        }
        self.items.push(candidate.to_string());
        true
    }

    fn take(&mut self, candidates: impl IntoIterator<Item = String>) {
        for c in candidates {
            if self.full() {
                break;
            }
            self.offer(&c);
        }
    }

    fn finish(self, source: &'static str) -> Vec<String> {
        if self.items.len() < self.want {
            tracing::debug!(
                source,
                want = self.want,
                got = self.items.len(),
                "distractor chain came up short"
            );
        }
        self.items
    }
}

// ---------------------------------------------------------------------------
// Meaning distractors
// ---------------------------------------------------------------------------

/// Wrong meanings for `entry`: unused meanings of other study entries in
/// random order, then pool meanings drawn without replacement.
///
/// No result case-insensitively equals any correct meaning of `entry`.
pub fn meaning_distractors<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    entries: &[VocabEntry],
    pool: &WordPool,
    count: usize,
) -> Vec<String> {
    let mut quota = Quota::new(count, entry.meanings.clone(), true);

    let mut others: Vec<&VocabEntry> =
        entries.iter().filter(|e| e.kanji != entry.kanji).collect();
    others.shuffle(rng);
    'study: for other in others {
        for meaning in &other.meanings {
            quota.offer(meaning);
            if quota.full() {
                break 'study;
            }
        }
    }

    if !quota.full() {
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.shuffle(rng);
        quota.take(order.into_iter().map(|i| pool.words()[i].meaning.clone()));
    }

    quota.finish("meaning")
}

// ---------------------------------------------------------------------------
// Kanji distractors
// ---------------------------------------------------------------------------

/// Wrong kanji for `correct`, biased toward plausible-looking words:
/// visually similar characters, then same-length study entries, then
/// same-length pool words (component-sharing first), then any pool word
/// ranked by character-count distance.
pub fn kanji_distractors<R: Rng>(
    rng: &mut R,
    correct: &str,
    entries: &[VocabEntry],
    pool: &WordPool,
    index: &SimilarityIndex,
    count: usize,
) -> Vec<String> {
    let correct_len = correct.chars().count();
    let correct_kanji = kanji_count(correct);
    let mut quota = Quota::new(count, vec![correct.to_string()], false);

    // 1. visually similar characters
    for c in index.similar_to(correct, count, rng) {
        quota.offer(&c.to_string());
    }

    // 2. study entries of the same character length, random order
    if !quota.full() {
        let mut same_len: Vec<&str> = entries
            .iter()
            .filter(|e| e.kanji != correct && e.kanji.chars().count() == correct_len)
            .map(|e| e.kanji.as_str())
            .collect();
        same_len.shuffle(rng);
        quota.take(same_len.into_iter().map(str::to_string));
    }

    // 3. same-length pool words, component-sharing ones first
    if !quota.full() {
        let mut same_len: Vec<&str> = pool
            .words()
            .iter()
            .filter(|w| w.word.chars().count() == correct_len)
            .map(|w| w.word.as_str())
            .collect();
        same_len.shuffle(rng);
        same_len.sort_by_key(|w| !index.shares_component(correct, w));
        quota.take(same_len.into_iter().map(str::to_string));
    }

    // 4. any pool word, nearest kanji count first, random tiebreak
    if !quota.full() {
        let mut ranked: Vec<(usize, u32, &str)> = pool
            .words()
            .iter()
            .map(|w| {
                let dist = kanji_count(&w.word).abs_diff(correct_kanji);
                (dist, rng.gen::<u32>(), w.word.as_str())
            })
            .collect();
        ranked.sort();
        quota.take(ranked.into_iter().map(|(_, _, w)| w.to_string()));
    }

    quota.finish("kanji")
}

// ---------------------------------------------------------------------------
// Reading distractors
// ---------------------------------------------------------------------------

/// Wrong readings for `entry`, most-similar first.
///
/// Candidates are scored by [`reading_score`] and sorted ascending with a
/// random tiebreak. Tiny vocabularies backfill with entries whose kanji
/// count is within one of the correct entry, then with anything left.
pub fn reading_distractors<R: Rng>(
    rng: &mut R,
    entry: &VocabEntry,
    entries: &[VocabEntry],
    count: usize,
) -> Vec<String> {
    let correct = entry.reading.as_str();
    let shape = ReadingShape::of(correct);
    let correct_len = correct.chars().count();
    let mut quota = Quota::new(count, vec![correct.to_string()], false);

    let mut scored: Vec<(i32, u32, &str)> = entries
        .iter()
        .filter(|e| e.reading != correct)
        .map(|e| {
            (
                reading_score(correct_len, &shape, &e.reading),
                rng.gen::<u32>(),
                e.reading.as_str(),
            )
        })
        .collect();
    scored.sort();
    quota.take(scored.into_iter().map(|(_, _, r)| r.to_string()));

    // backfill: near kanji count first, then anything left
    if !quota.full() {
        let near = kanji_count(&entry.kanji);
        let mut close: Vec<&str> = entries
            .iter()
            .filter(|e| kanji_count(&e.kanji).abs_diff(near) <= 1)
            .map(|e| e.reading.as_str())
            .collect();
        close.shuffle(rng);
        quota.take(close.into_iter().map(str::to_string));
    }
    if !quota.full() {
        let mut rest: Vec<&str> = entries.iter().map(|e| e.reading.as_str()).collect();
        rest.shuffle(rng);
        quota.take(rest.into_iter().map(str::to_string));
    }

    quota.finish("reading")
}
