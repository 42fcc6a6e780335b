//! Full walkthrough of the quiz content pipeline.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `compliance_quiz_gen` works end to end:
//!
//! 1. **Question selection** — a seeded generator draws a quiz from the
//!    fire-safety bank, so the output is deterministic and reproducible.
//!
//! 2. **Answer feedback** — one question is answered correctly and one
//!    incorrectly, showing the templated explanations, tips, fun facts, and
//!    gamification points that come back.
//!
//! 3. **Attempt wrap-up** — the progress insights and a rendered certificate
//!    for the finished quiz.
//!
//! ## Key concepts demonstrated
//!
//! - `ContentGenerator::with_seed(u64)` makes every selection and template
//!   pick fully deterministic; `ContentGenerator::new()` seeds from entropy.
//! - Unknown topic keys never error — they serve the built-in fallback
//!   question instead.
//! - `ai_summary` is async (it simulates a 0.5-1.5 s "thinking" pause), so it
//!   needs a runtime and is not shown here; everything else is synchronous.

use compliance_quiz_gen::{AnsweredQuestion, ContentGenerator, Topic};

fn main() {
    let mut generator = ContentGenerator::with_seed(2024);

    // ── Question selection ─────────────────────────────────────────────────
    println!();
    println!("══ A 5-question fire-safety quiz (seed 2024) ══");
    println!();
    let questions = generator.select_questions("fire-safety", 5);
    for q in &questions {
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "  [{}]  Difficulty: {}  ~{} min  Host: {} {}",
            q.id,
            q.difficulty,
            q.estimated_minutes,
            q.persona.emoji(),
            q.persona.display_name()
        );
        println!("  Q: {}", q.question.prompt);
        for (i, option) in q.question.options.iter().enumerate() {
            let marker = if i == q.question.correct_index { "✓" } else { " " };
            println!("  [{i}] {marker} {option}");
        }
        println!();
    }

    // ── Feedback: one right, one wrong ─────────────────────────────────────
    println!("══ Feedback ══");
    println!();
    let first = &questions[0];
    let right = generator.explain_answer(first, first.question.correct_index, true);
    println!("  {} {}", right.icon, right.body);
    println!(
        "  +{} points (+{} streak bonus)",
        right.gamification.points, right.gamification.streak_bonus
    );
    println!();

    let second = &questions[1];
    let wrong_index = (second.question.correct_index + 1) % 4;
    let wrong = generator.explain_answer(second, wrong_index, false);
    println!("  {} {}", wrong.icon, wrong.body);
    println!("  Fun fact: {}", wrong.fun_fact);
    for tip in &wrong.tips {
        println!("  Tip: {tip}");
    }
    println!();

    // A harder follow-up is offered after the correct answer.
    let follow_up = generator.follow_up_question(&first.question, true);
    println!("  Next up: {}", follow_up.prompt);
    println!("  ({})", follow_up.context);
    println!();

    // ── Unknown topics soft-fail ───────────────────────────────────────────
    println!("══ Unknown topic key ══");
    println!();
    let fallback = generator.select_questions("quantum-safety", 3);
    println!(
        "  \"quantum-safety\" has no bank — served {} fallback question: {}",
        fallback.len(),
        fallback[0].question.prompt
    );
    println!();

    // ── Wrapping up the attempt ────────────────────────────────────────────
    println!("══ Progress insights (4/5 correct, 6 minutes) ══");
    println!();
    let answered: Vec<AnsweredQuestion> = (0..5)
        .map(|i| AnsweredQuestion {
            topic: Topic::FireSafety,
            was_correct: i != 2,
        })
        .collect();
    let insights = generator
        .summarize_progress(&answered, 4, 360)
        .expect("attempt is non-empty");
    println!("  {}", insights.summary);
    for s in &insights.strengths {
        println!("  Strength: {s}");
    }
    for a in &insights.improvement_areas {
        println!("  Improve: {a}");
    }
    for r in &insights.recommendations {
        println!("  Recommended: {r}");
    }
    println!("  {}", insights.motivational_message);
    println!();

    println!("══ Certificate ══");
    println!();
    let certificate = generator.render_certificate("Jordan Smith", "Fire Safety", 80, "2026-08-30");
    println!("  {certificate}");
    println!();
}
