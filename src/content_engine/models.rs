use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// A compliance training category. Each topic (except `General`) owns a
/// question bank; `General` is the category of the fallback question served
/// for unknown topic keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    FireSafety,
    Gdpr,
    HealthSafety,
    ManualHandling,
    Cybersecurity,
    Safeguarding,
    FoodSafety,
    ElectricalSafety,
    FirstAid,
    Environmental,
    General,
}

impl Topic {
    /// The 10 topics that carry a question bank, in canonical order.
    pub const BANKED: [Topic; 10] = [
        Topic::FireSafety,
        Topic::Gdpr,
        Topic::HealthSafety,
        Topic::ManualHandling,
        Topic::Cybersecurity,
        Topic::Safeguarding,
        Topic::FoodSafety,
        Topic::ElectricalSafety,
        Topic::FirstAid,
        Topic::Environmental,
    ];

    /// The string key used at the API boundary (e.g. `"fire-safety"`).
    pub fn key(self) -> &'static str {
        match self {
            Topic::FireSafety       => "fire-safety",
            Topic::Gdpr             => "gdpr",
            Topic::HealthSafety     => "health-safety",
            Topic::ManualHandling   => "manual-handling",
            Topic::Cybersecurity    => "cybersecurity",
            Topic::Safeguarding     => "safeguarding",
            Topic::FoodSafety       => "food-safety",
            Topic::ElectricalSafety => "electrical-safety",
            Topic::FirstAid         => "first-aid",
            Topic::Environmental    => "environmental",
            Topic::General          => "general",
        }
    }

    /// Parse an API topic key. Returns `None` for keys this crate has never
    /// heard of — callers decide whether that soft-fails (see
    /// [`ContentGenerator::select_questions`](crate::ContentGenerator::select_questions)).
    pub fn from_key(key: &str) -> Option<Topic> {
        match key {
            "fire-safety"       => Some(Topic::FireSafety),
            "gdpr"              => Some(Topic::Gdpr),
            "health-safety"     => Some(Topic::HealthSafety),
            "manual-handling"   => Some(Topic::ManualHandling),
            "cybersecurity"     => Some(Topic::Cybersecurity),
            "safeguarding"      => Some(Topic::Safeguarding),
            "food-safety"       => Some(Topic::FoodSafety),
            "electrical-safety" => Some(Topic::ElectricalSafety),
            "first-aid"         => Some(Topic::FirstAid),
            "environmental"     => Some(Topic::Environmental),
            "general"           => Some(Topic::General),
            _                   => None,
        }
    }

    /// Human-readable label for narrative text ("fire safety", "gdpr", …).
    pub fn label(self) -> String {
        self.key().replace('-', " ")
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ---------------------------------------------------------------------------
// Cosmetic metadata
// ---------------------------------------------------------------------------

/// Difficulty label derived from prompt length. Not stored in the banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Longer prompts read harder: >100 chars → Hard, >50 → Medium, else Easy.
    pub fn from_prompt(prompt: &str) -> Difficulty {
        let len = prompt.chars().count();
        if len > 100 {
            Difficulty::Hard
        } else if len > 50 {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard   => write!(f, "Hard"),
        }
    }
}

/// Cosmetic identity attached to feedback text. Purely decorative — no
/// persona changes any answer, score, or recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Persona {
    Alex,
    DrData,
    SafetySam,
    ProfessorProtocol,
    AiAssistant,
}

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Alex,
        Persona::DrData,
        Persona::SafetySam,
        Persona::ProfessorProtocol,
        Persona::AiAssistant,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Persona::Alex              => "Alex",
            Persona::DrData            => "Dr. Data",
            Persona::SafetySam         => "Safety Sam",
            Persona::ProfessorProtocol => "Professor Protocol",
            Persona::AiAssistant       => "AI-Assistant",
        }
    }

    pub fn trait_label(self) -> &'static str {
        match self {
            Persona::Alex              => "Friendly Safety Expert",
            Persona::DrData            => "GDPR Compliance Guru",
            Persona::SafetySam         => "Health & Safety Veteran",
            Persona::ProfessorProtocol => "Regulations Specialist",
            Persona::AiAssistant       => "Training Companion",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Persona::Alex              => "👨‍🚒",
            Persona::DrData            => "👨‍💼",
            Persona::SafetySam         => "👷‍♂️",
            Persona::ProfessorProtocol => "👨‍🏫",
            Persona::AiAssistant       => "🤖",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Cosmetic "AI response style" label attached to feedback. Unused downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStyle {
    Conversational,
    Technical,
    StoryBased,
    Simple,
    Humorous,
    Serious,
    Motivational,
}

impl ResponseStyle {
    pub const ALL: [ResponseStyle; 7] = [
        ResponseStyle::Conversational,
        ResponseStyle::Technical,
        ResponseStyle::StoryBased,
        ResponseStyle::Simple,
        ResponseStyle::Humorous,
        ResponseStyle::Serious,
        ResponseStyle::Motivational,
    ];
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseStyle::Conversational => "Engaging and conversational",
            ResponseStyle::Technical      => "Technical and detailed",
            ResponseStyle::StoryBased     => "Story-based with real-world examples",
            ResponseStyle::Simple         => "Simple and easy to understand",
            ResponseStyle::Humorous       => "Humorous and light-hearted",
            ResponseStyle::Serious        => "Serious and professional",
            ResponseStyle::Motivational   => "Motivational and encouraging",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Question records
// ---------------------------------------------------------------------------

/// One multiple-choice question as stored in a bank. Immutable once defined;
/// `correct_index` always addresses one of the four options (validated when
/// the generator loads the banks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: [String; 4],
    pub correct_index: usize,
    pub topic: Topic,
    pub explanation: String,
}

impl QuestionRecord {
    /// Text of the correct option.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// A bank question decorated for delivery: stable-ish id, derived difficulty,
/// a random time estimate, and an assigned persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedQuestion {
    /// `"{topic-key}-q{ordinal}"`, ordinal starting at 1 within the selection.
    pub id: String,
    pub question: QuestionRecord,
    pub difficulty: Difficulty,
    /// Estimated answering time in whole minutes, uniform in 1..=3.
    pub estimated_minutes: u8,
    pub persona: Persona,
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// A badge the learner can work towards. Informational only — the engine
/// never tracks whether thresholds are met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub icon: String,
    pub threshold: u32,
}

/// Points and badge data attached to feedback. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gamification {
    pub points: u32,
    pub streak_bonus: u32,
    pub eligible_badges: Vec<Badge>,
}

/// Templated feedback for one submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub body: String,
    pub icon: String,
    pub persona: Persona,
    pub style: ResponseStyle,
    /// At most 3 tips: the topic's fixed list plus one random general tip.
    pub tips: Vec<String>,
    pub fun_fact: String,
    pub gamification: Gamification,
}

/// Canned follow-up question stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub prompt: String,
    pub options: [String; 4],
    /// Always 0. Follow-ups are an informational stub, not a scored
    /// question; the index is a documented placeholder.
    pub correct_index: usize,
    pub topic: Topic,
    /// Quotes the opening of the question this follows up on.
    pub context: String,
}

// ---------------------------------------------------------------------------
// Progress & summaries
// ---------------------------------------------------------------------------

/// Caller-supplied tally of one answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub topic: Topic,
    pub was_correct: bool,
}

/// Narrative breakdown of a completed attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressInsights {
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    /// 2–3 entries chosen by accuracy and pace thresholds.
    pub recommendations: Vec<String>,
    pub motivational_message: String,
}

/// Input for the delayed AI-style summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub answered: Vec<AnsweredQuestion>,
    pub score: u32,
    pub time_spent_secs: u32,
}

/// The "AI" summary produced after the simulated thinking pause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    pub generated_at: DateTime<Utc>,
    pub overall_score: u32,
    pub total_questions: usize,
    /// Percentage in 0.0..=100.0.
    pub accuracy: f32,
    pub secs_per_question: f32,
    pub strengths: Vec<String>,
    pub recommendations: Vec<String>,
    pub comment: String,
    pub next_steps: Vec<String>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Recoverable caller-contract violations. Everything else in this crate
/// soft-fails (unknown topics, out-of-range option indices).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Summaries divide by the answered-question count; an empty list is a
    /// contract violation, reported instead of producing a NaN accuracy.
    #[error("attempt contains no answered questions")]
    EmptyAttempt,
}
