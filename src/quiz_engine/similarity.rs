//! Character classification, reading-shape scoring, and the static
//! visual-similarity index.
//!
//! Everything here is a ranking heuristic: nothing in this module decides
//! correctness, only which wrong answers look plausible.

use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

// ---------------------------------------------------------------------------
// Script ranges
// ---------------------------------------------------------------------------

/// Is `c` a CJK unified ideograph?
pub fn is_kanji(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309f}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30a0}'..='\u{30ff}').contains(&c)
}

/// Number of kanji characters in `text`.
pub fn kanji_count(text: &str) -> usize {
    text.chars().filter(|&c| is_kanji(c)).count()
}

/// True if the final character is hiragana — the okurigana signal.
pub fn ends_in_hiragana(text: &str) -> bool {
    text.chars().last().map(is_hiragana).unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Reading shape
// ---------------------------------------------------------------------------

/// Coarse complexity profile of a reading, used to rank reading distractors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingShape {
    /// Length in characters, bucketed by 3.
    pub length_bucket: usize,
    /// Reading lists several alternatives (`・` or `、`).
    pub has_alternatives: bool,
    pub ends_in_hiragana: bool,
}

impl ReadingShape {
    pub fn of(reading: &str) -> Self {
        ReadingShape {
            length_bucket: reading.chars().count() / 3,
            has_alternatives: reading.contains('・') || reading.contains('、'),
            ends_in_hiragana: ends_in_hiragana(reading),
        }
    }
}

/// Similarity score of `candidate` against a correct reading; lower is more
/// similar. Length distance dominates; a shared multi-reading marker or a
/// shared okurigana ending pulls the score down.
pub fn reading_score(correct_len: usize, correct: &ReadingShape, candidate: &str) -> i32 {
    let candidate_shape = ReadingShape::of(candidate);
    let len_diff = (candidate.chars().count() as i32 - correct_len as i32).abs();

    let mut score = len_diff * 2;
    if correct.has_alternatives && candidate_shape.has_alternatives {
        score -= 5;
    }
    if correct.ends_in_hiragana && candidate_shape.ends_in_hiragana {
        score -= 3;
    }
    score
}

// ---------------------------------------------------------------------------
// Visual similarity groups
// ---------------------------------------------------------------------------

/// Kanji grouped by a shared visual component. Each string is one group;
/// every character in it is a member.
const SIMILAR_KANJI_GROUPS: [&str; 16] = [
    // Water radical 氵
    "治洗洋流浅深温湖海港湾潮滝沼泳浴液涙消渡測演濃漁漢滅漏浪",
    // Fire radical 火/灬
    "火炎炉灯煙焼燃熱照煮蒸熟燥",
    // Person radical 亻
    "仕代休件仲伝位住体作使例供価俳倍候倒借値健側傷働像億優倫",
    // Tree radical 木
    "木本札机村材束杯松板林枚果枝柱校根格案桜梅械棒棟森植検業極楽構様権横樹橋機",
    // Heart radical 忄/心
    "心必忘応念思急性怒恐恥恋息悪悲情惜想意愛感慣態慶憲懇懲",
    // Hand radical 扌
    "打払投折抜押拝拾持指挙捨捕探接推描提換握援損搬携摘撮擦操撲",
    // Mouth radical 口
    "口古句叫台史右司各合吉同名向君否含吸告呼命和品員唱商問善喚営器噴",
    // Sun radical 日
    "日旧早明映春昨星昼時晩普景暖暗暮暴曜曇",
    // Metal radical 金
    "金針鉄鋭銀銅銭鋼録鏡鐘鑑",
    // Word radical 言
    "言計訂記訓託訪設許訳証詞詠詩試詰話該詳認誌語誠誤説読課調談論諭諸講謝識警議護",
    // Foot radical 足
    "足距跡路跳踊踏蹴",
    // Ear radical 耳
    "耳聞聖聴職",
    // Eye radical 目
    "目直相省看眠眼着睡督瞬",
    // Rice radical 米
    "米粉粋粒精糖糧",
    // Thread radical 糸
    "糸紀約紅納純紙級素紹細終組経結給絡統絵絶継続維綱網緊総緑線編練縁縦縮績繁織繰纏絞",
    // Moon/flesh radical 月
    "月肉肝胃背胸能脳腕腰腹臓服朝期",
];

/// Character → group lookup over the static similarity groups, built once at
/// startup and queried per question.
#[derive(Debug)]
pub struct SimilarityIndex {
    groups: Vec<Vec<char>>,
    by_char: HashMap<char, Vec<usize>>,
}

impl SimilarityIndex {
    pub fn new() -> Self {
        let groups: Vec<Vec<char>> = SIMILAR_KANJI_GROUPS
            .iter()
            .map(|g| g.chars().collect())
            .collect();

        let mut by_char: HashMap<char, Vec<usize>> = HashMap::new();
        for (gid, group) in groups.iter().enumerate() {
            for &c in group {
                by_char.entry(c).or_default().push(gid);
            }
        }
        SimilarityIndex { groups, by_char }
    }

    /// Characters that look similar to the kanji of `word`: the other members
    /// of every group containing one of its characters, deduplicated.
    ///
    /// Returns a random sample of `count` when enough candidates exist, else
    /// every candidate — callers top up from other sources.
    pub fn similar_to<R: Rng>(&self, word: &str, count: usize, rng: &mut R) -> Vec<char> {
        let mut candidates: Vec<char> = Vec::new();
        for c in word.chars().filter(|&c| is_kanji(c)) {
            let Some(gids) = self.by_char.get(&c) else { continue };
            for &gid in gids {
                for &other in &self.groups[gid] {
                    if other != c && !word.contains(other) && !candidates.contains(&other) {
                        candidates.push(other);
                    }
                }
            }
        }

        if candidates.len() >= count {
            candidates.choose_multiple(rng, count).copied().collect()
        } else {
            candidates
        }
    }

    /// Does `other` share a visual component group with any kanji of `word`?
    pub fn shares_component(&self, word: &str, other: &str) -> bool {
        let mut word_groups: Vec<usize> = Vec::new();
        for c in word.chars().filter(|&c| is_kanji(c)) {
            if let Some(gids) = self.by_char.get(&c) {
                word_groups.extend(gids);
            }
        }
        if word_groups.is_empty() {
            return false;
        }
        other
            .chars()
            .filter(|&c| is_kanji(c))
            .any(|c| {
                self.by_char
                    .get(&c)
                    .map(|gids| gids.iter().any(|g| word_groups.contains(g)))
                    .unwrap_or(false)
            })
    }
}

impl Default for SimilarityIndex {
    fn default() -> Self {
        SimilarityIndex::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn kanji_count_ignores_kana() {
        assert_eq!(kanji_count("買う"), 1);
        assert_eq!(kanji_count("読書"), 2);
        assert_eq!(kanji_count("たべる"), 0);
    }

    #[test]
    fn okurigana_signal() {
        assert!(ends_in_hiragana("買う"));
        assert!(!ends_in_hiragana("読書"));
        assert!(!ends_in_hiragana(""));
    }

    #[test]
    fn reading_shape_buckets_and_flags() {
        let shape = ReadingShape::of("いく・ゆく");
        assert_eq!(shape.length_bucket, 1); // 5 chars / 3
        assert!(shape.has_alternatives);
        assert!(shape.ends_in_hiragana);

        let plain = ReadingShape::of("よむ");
        assert_eq!(plain.length_bucket, 0);
        assert!(!plain.has_alternatives);
    }

    #[test]
    fn similar_kanji_excludes_word_characters() {
        let index = SimilarityIndex::new();
        let mut rng = StdRng::seed_from_u64(7);
        let similar = index.similar_to("海", 5, &mut rng);
        assert_eq!(similar.len(), 5);
        assert!(!similar.contains(&'海'));
        // all candidates come from the water group
        for c in similar {
            assert!("治洗洋流浅深温湖港湾潮滝沼泳浴液涙消渡測演濃漁漢滅漏浪".contains(c));
        }
    }

    #[test]
    fn similar_kanji_returns_all_when_short() {
        let index = SimilarityIndex::new();
        let mut rng = StdRng::seed_from_u64(7);
        // 耳 group has 5 members, so at most 4 others exist
        let similar = index.similar_to("耳", 10, &mut rng);
        assert_eq!(similar.len(), 4);
    }

    #[test]
    fn unknown_kanji_has_no_neighbors() {
        let index = SimilarityIndex::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(index.similar_to("凸", 3, &mut rng).is_empty());
        assert!(index.similar_to("たべる", 3, &mut rng).is_empty());
    }

    #[test]
    fn shares_component_detects_common_group() {
        let index = SimilarityIndex::new();
        assert!(index.shares_component("海", "港"));
        assert!(!index.shares_component("海", "金"));
        assert!(!index.shares_component("たべる", "海"));
    }
}
