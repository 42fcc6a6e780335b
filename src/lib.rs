//! # compliance_quiz_gen
//!
//! A fully offline, deterministic quiz content and feedback generator for
//! workplace compliance e-learning.
//!
//! This library holds hardcoded multiple-choice question banks across 10
//! compliance topics (fire safety, GDPR, health & safety, manual handling,
//! cybersecurity, and more), draws random subsets of them, and fabricates
//! templated "AI-style" feedback: explanations, learning tips, fun facts,
//! certificates, and progress summaries. No model inference, no persistence,
//! no network calls — just banks, uniform shuffles, and template substitution.
//!
//! ## How it works
//!
//! 1. Construct a [`ContentGenerator`] — `new()` seeds from OS entropy,
//!    `with_seed(u64)` makes every selection and template pick reproducible.
//! 2. Call [`ContentGenerator::select_questions`] with a topic key and a
//!    count — the engine shuffles the bank with Fisher-Yates, truncates, and
//!    decorates each question with an id, a derived difficulty label, a time
//!    estimate, and a persona.
//! 3. After each answer, [`ContentGenerator::explain_answer`] composes
//!    feedback from fixed template pools, plus tips, a fun fact, and
//!    gamification points; [`ContentGenerator::summarize_progress`] and the
//!    delayed [`ContentGenerator::ai_summary`] wrap up a whole attempt.
//!
//! ## Key features
//!
//! - **Deterministic**: `with_seed` reproduces the exact same questions and
//!   feedback text every time — useful for tests and replaying sessions.
//! - **Soft failure**: unknown topic keys fall back to a built-in default
//!   question, and out-of-range answer indices degrade to a placeholder;
//!   neither ever errors.
//! - **Unbiased selection**: bank sampling is a proper Fisher-Yates
//!   permutation, not a sort-by-random-comparator approximation.
//!
//! ## Quick start
//!
//! ```rust
//! use compliance_quiz_gen::ContentGenerator;
//!
//! let mut generator = ContentGenerator::with_seed(42);
//!
//! let questions = generator.select_questions("fire-safety", 3);
//! for q in &questions {
//!     println!("[{}] ({}) {}", q.id, q.difficulty, q.question.prompt);
//! }
//!
//! let first = &questions[0];
//! let feedback = generator.explain_answer(first, first.question.correct_index, true);
//! println!("{} {}", feedback.icon, feedback.body);
//! assert_eq!(feedback.gamification.points, 10);
//! ```

pub mod content_engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `compliance_quiz_gen::ContentGenerator`
// directly without reaching into `content_engine::`.
pub use content_engine::{
    AiSummary, AnsweredQuestion, Badge, ContentError, ContentGenerator, DecoratedQuestion,
    Difficulty, FeedbackResult, FollowUpQuestion, Gamification, Persona, ProgressInsights,
    QuestionRecord, QuizAttempt, ResponseStyle, Topic,
};

#[cfg(test)]
mod tests;
