//! Question builders grouped by answer modality.
//!
//! Every public builder follows the same signature:
//!
//! ```ignore
//! pub fn <name><R: Rng>(
//!     rng: &mut R,
//!     entry: &VocabEntry,
//!     material: &Material<'_>,
//! ) -> Result<Question>
//! ```
//!
//! The assembler dispatches to these via `assembler.rs`.

/// kanji_to_polish, kanji_compound
pub mod meaning;
/// polish_to_kanji, reading_to_kanji
pub mod kanji;
/// reading, all_readings
pub mod reading;
/// scramble, reading_scramble
pub mod scramble;
/// draw_kanji, stroke_order
pub mod writing;
/// bomb_defuse, runner_game
pub mod games;

use crate::quiz_engine::models::{VocabEntry, WordPool};
use crate::quiz_engine::similarity::SimilarityIndex;

/// Everything a builder draws material from: the study list, the auxiliary
/// pool, and the visual-similarity index. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct Material<'a> {
    pub entries: &'a [VocabEntry],
    pub pool: &'a WordPool,
    pub index: &'a SimilarityIndex,
}
