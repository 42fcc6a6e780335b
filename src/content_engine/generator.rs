use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

use crate::content_engine::{
    banks, certificate,
    draw::Drawpile,
    feedback, insights,
    models::{
        AiSummary, AnsweredQuestion, ContentError, DecoratedQuestion, Difficulty, FeedbackResult,
        FollowUpQuestion, Persona, ProgressInsights, QuestionRecord, QuizAttempt, Topic,
    },
    summary,
};

/// The content & feedback generator.
///
/// Holds the immutable topic → bank table (built once at construction) and an
/// injected seedable RNG. There is deliberately no global instance: construct
/// one and pass it to whoever needs it. Seed it for reproducible output:
///
/// ```rust
/// use compliance_quiz_gen::ContentGenerator;
///
/// let mut generator = ContentGenerator::with_seed(42);
/// let questions = generator.select_questions("fire-safety", 5);
/// assert_eq!(questions.len(), 5);
/// ```
pub struct ContentGenerator {
    banks: HashMap<Topic, Vec<QuestionRecord>>,
    rng: StdRng,
}

impl ContentGenerator {
    /// Construct with OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Construct with a fixed seed — same seed, same selections, same
    /// feedback text. Used by tests and progress-replay features.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let banks = banks::load_all();

        // Bank content is hardcoded; a malformed record is a programming
        // error, caught here once rather than on every access.
        for (topic, bank) in &banks {
            assert!(!bank.is_empty(), "empty bank for topic {topic}");
            for record in bank {
                assert!(
                    record.correct_index < record.options.len(),
                    "correct_index out of range in {topic} bank"
                );
                assert_eq!(
                    record.topic, *topic,
                    "record filed under the wrong topic in {topic} bank"
                );
            }
        }

        ContentGenerator { banks, rng }
    }

    /// API keys of every topic that carries a bank.
    pub fn topic_keys(&self) -> Vec<&'static str> {
        Topic::BANKED.iter().map(|t| t.key()).collect()
    }

    /// Number of questions banked for `topic_key` (0 for unknown keys).
    pub fn bank_size(&self, topic_key: &str) -> usize {
        Topic::from_key(topic_key)
            .and_then(|t| self.banks.get(&t))
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Draw `min(count, bank_size)` distinct questions for `topic_key`,
    /// uniformly at random, each decorated with an id, derived difficulty,
    /// time estimate, and persona.
    ///
    /// Unknown topic keys soft-fail to a one-element fallback list; this
    /// method never errors.
    pub fn select_questions(&mut self, topic_key: &str, count: usize) -> Vec<DecoratedQuestion> {
        let bank = match Topic::from_key(topic_key).and_then(|t| self.banks.get(&t)) {
            Some(bank) => bank,
            None => {
                warn!(topic_key, "no question bank for topic, serving the fallback question");
                let record = banks::fallback_question();
                let decorated = decorate(&mut self.rng, record, topic_key, 0);
                return vec![decorated];
            }
        };

        let take = count.min(bank.len());
        let mut pile = Drawpile::new_shuffled(&mut self.rng, bank.len());
        let picked: Vec<QuestionRecord> = pile.draw_n(take).into_iter().map(|i| bank[i].clone()).collect();

        picked
            .into_iter()
            .enumerate()
            .map(|(ordinal, record)| decorate(&mut self.rng, record, topic_key, ordinal))
            .collect()
    }

    /// Compose templated feedback for one submitted answer. An out-of-range
    /// `chosen_index` is substituted with a placeholder, never an error.
    pub fn explain_answer(
        &mut self,
        question: &DecoratedQuestion,
        chosen_index: usize,
        is_correct: bool,
    ) -> FeedbackResult {
        feedback::compose(&mut self.rng, question, chosen_index, is_correct)
    }

    /// Canned follow-up stub (harder set after a correct answer, easier
    /// otherwise). See [`FollowUpQuestion::correct_index`] for the fixed-0
    /// caveat.
    pub fn follow_up_question(
        &self,
        previous: &QuestionRecord,
        was_correct: bool,
    ) -> FollowUpQuestion {
        feedback::follow_up(previous, was_correct)
    }

    /// Narrative breakdown of a completed attempt.
    ///
    /// Errors with [`ContentError::EmptyAttempt`] if `answered` is empty —
    /// callers must guard before asking for a summary.
    pub fn summarize_progress(
        &self,
        answered: &[AnsweredQuestion],
        score: u32,
        time_spent_secs: u32,
    ) -> Result<ProgressInsights, ContentError> {
        insights::build(answered, score, time_spent_secs)
    }

    /// One of 3 certificate sentences with all fields substituted.
    pub fn render_certificate(
        &mut self,
        name: &str,
        topic_name: &str,
        score: u32,
        date: &str,
    ) -> String {
        certificate::render(&mut self.rng, name, topic_name, score, date)
    }

    /// The delayed "AI" summary: sleeps a uniform 500-1500 ms, then returns
    /// the same tallies `summarize_progress` computes. Dropping the future
    /// abandons the wait; no state is touched during the pause.
    pub async fn ai_summary(&mut self, attempt: &QuizAttempt) -> Result<AiSummary, ContentError> {
        summary::generate(&mut self.rng, attempt).await
    }
}

impl Default for ContentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Attach delivery metadata to a bank record.
fn decorate<R: Rng>(
    rng: &mut R,
    question: QuestionRecord,
    topic_key: &str,
    ordinal: usize,
) -> DecoratedQuestion {
    DecoratedQuestion {
        id: format!("{topic_key}-q{}", ordinal + 1),
        difficulty: Difficulty::from_prompt(&question.prompt),
        estimated_minutes: rng.gen_range(1..=3),
        persona: Persona::ALL[rng.gen_range(0..Persona::ALL.len())],
        question,
    }
}
