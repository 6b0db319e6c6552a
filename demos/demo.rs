//! End-to-end demo of the quiz generator.
//!
//! Run with: `cargo run --example demo`
//!
//! Builds a small study list, generates one seeded quiz across all twelve
//! question kinds, and prints each question with its answer key. The fixed
//! seed makes the output reproducible.

use kanji_drill_gen::{
    generate_quiz, Correctness, Payload, Question, QuizConfig, VocabEntry, WordPool,
};

fn study_list() -> Vec<VocabEntry> {
    vec![
        VocabEntry::new("かう", "買う", ["kupować"]),
        VocabEntry::new("うる", "売る", ["sprzedawać"]),
        VocabEntry::new("よむ", "読む", ["czytać"]),
        VocabEntry::new("どくしょ", "読書", ["czytanie książek"]),
        VocabEntry::new("いく、ゆく", "行く", ["iść"]),
        VocabEntry::new("たべる", "食べる", ["jeść"]),
        VocabEntry::new("のむ", "飲む", ["pić"]),
        VocabEntry::new("きく", "聞く", ["słyszeć", "pytać"]),
        VocabEntry::new("はなす", "話す", ["mówić"]),
        VocabEntry::new("かく", "書く", ["pisać"]),
    ]
}

fn print_question(number: usize, question: &Question) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  【{}】 [{}]", number, question.kind);
    println!("  Q: {}", question.prompt);
    println!("     {}", question.prompt_en);
    if let Some(hint) = &question.hint {
        println!("  Hint: {hint}");
    }
    for (i, option) in question.options.iter().enumerate() {
        println!("    {}) {option}", (b'a' + (i % 26) as u8) as char);
    }
    match &question.payload {
        Payload::Bomb { pairs, readings, time_limit } => {
            println!("  {} pairs, {time_limit}s on the clock", pairs.len());
            println!("  Readings: {}", readings.join(" / "));
        }
        Payload::Runner { checkpoints, time_limit } => {
            println!("  {} checkpoints, {time_limit}s on the clock", checkpoints.len());
            for cp in checkpoints {
                println!("    „{}\" → {}", cp.meaning, cp.options.join(" / "));
            }
        }
        Payload::None => {}
    }
    let key = match &question.correct {
        Correctness::Index(i) => format!("{}) {}", (b'a' + (*i % 26) as u8) as char, question.correct_answer),
        Correctness::Indices(_) => question.correct_answer.clone(),
        Correctness::Target(t) => t.clone(),
    };
    println!("  A: {key}");
    println!();
}

fn main() {
    let entries = study_list();
    let config = QuizConfig::new(entries.len()).with_seed(42);
    let quiz = generate_quiz(&entries, &WordPool::fallback(), &config)
        .expect("every demo entry carries a meaning");

    println!("Generated {} questions from {} entries (seed 42)\n", quiz.len(), entries.len());
    for (i, question) in quiz.iter().enumerate() {
        print_question(i + 1, question);
    }
}
