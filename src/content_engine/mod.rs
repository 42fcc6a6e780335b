//! Core content engine — question selection, feedback templating, summaries.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: topics, records, personas, results, errors |
//! | `draw`        | Fisher-Yates index drawpile for unbiased bank sampling |
//! | `banks`       | Hardcoded question banks, one module per compliance topic |
//! | `feedback`    | Correct/incorrect templates, tips, fun facts, badges, follow-ups |
//! | `insights`    | Accuracy tiers, strengths, improvement areas, recommendations |
//! | `certificate` | Certificate sentence rendering |
//! | `summary`     | Delayed "AI" summary behind the simulated thinking pause |
//! | `generator`   | `ContentGenerator` — the constructed entry point holding banks + RNG |

pub mod banks;
pub mod certificate;
pub mod draw;
pub mod feedback;
pub mod generator;
pub mod insights;
pub mod models;
pub mod summary;

// Re-export the public API surface so callers can use
// `content_engine::ContentGenerator` without reaching into sub-modules.
pub use generator::ContentGenerator;
pub use models::{
    AiSummary, AnsweredQuestion, Badge, ContentError, DecoratedQuestion, Difficulty,
    FeedbackResult, FollowUpQuestion, Gamification, Persona, ProgressInsights, QuestionRecord,
    QuizAttempt, ResponseStyle, Topic,
};
