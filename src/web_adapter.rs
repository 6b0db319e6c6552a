//! Map finished questions to the JSON shape the web player consumes.
//!
//! The player expects one flat object per question: base fields shared by
//! every kind, plus kind-specific fields (`correct`, `correct_indices`,
//! `bomb_*`, `runner_*`). Serialization details beyond this shape are the
//! renderer's responsibility.

use serde_json::{json, Map, Value};

use crate::quiz_engine::models::{Correctness, Payload, Question};

/// Build the player's per-question JSON object. `id` is the question's
/// position within the quiz.
pub fn to_client_question(question: &Question, id: usize) -> Value {
    let entry = &question.entry;
    let mut obj = Map::new();
    obj.insert("id".into(), json!(id));
    obj.insert("question".into(), json!(question.prompt));
    obj.insert("question_en".into(), json!(question.prompt_en));
    obj.insert("options".into(), json!(question.options));
    obj.insert("type".into(), json!(question.kind.tag()));
    obj.insert("kanji".into(), json!(entry.kanji));
    obj.insert("reading".into(), json!(entry.reading));
    obj.insert(
        "meaning".into(),
        json!(entry.meanings.first().cloned().unwrap_or_default()),
    );
    obj.insert(
        "jishoUrl".into(),
        json!(format!("https://jisho.org/search/{}", entry.kanji)),
    );

    match &question.correct {
        Correctness::Index(i) => {
            obj.insert("correct".into(), json!(i));
        }
        Correctness::Indices(indices) => {
            obj.insert("correct_indices".into(), json!(indices));
        }
        Correctness::Target(target) => {
            obj.insert("correct".into(), json!(target));
        }
    }
    if let Some(hint) = &question.hint {
        obj.insert("hint".into(), json!(hint));
    }

    match &question.payload {
        Payload::None => {}
        Payload::Bomb { pairs, readings, time_limit } => {
            let pairs: Vec<Value> = pairs
                .iter()
                .map(|p| {
                    json!({
                        "kanji": p.kanji,
                        "meaning": p.meaning,
                        "reading": p.reading,
                        "readingIdx": p.reading_idx,
                    })
                })
                .collect();
            obj.insert("bomb_pairs".into(), Value::Array(pairs));
            obj.insert("bomb_readings".into(), json!(readings));
            obj.insert("bomb_time".into(), json!(time_limit));
        }
        Payload::Runner { checkpoints, time_limit } => {
            let checkpoints: Vec<Value> = checkpoints
                .iter()
                .map(|c| {
                    json!({
                        "meaning": c.meaning,
                        "options": c.options,
                        "correct": c.correct,
                        "correctKanji": c.correct_kanji,
                    })
                })
                .collect();
            obj.insert("runner_checkpoints".into(), Value::Array(checkpoints));
            obj.insert("runner_time".into(), json!(time_limit));
        }
    }

    Value::Object(obj)
}

/// The whole quiz as a JSON array, ids assigned by position.
pub fn to_client_quiz(questions: &[Question]) -> Value {
    Value::Array(
        questions
            .iter()
            .enumerate()
            .map(|(id, q)| to_client_question(q, id))
            .collect(),
    )
}
